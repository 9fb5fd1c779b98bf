// src/config.rs

use std::{env, net::SocketAddr, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{db::DashboardRepository, services::DashboardService};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Configurações lidas do ambiente (.env é carregado antes).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    // Camada só de leitura: criar o schema é opt-in
    pub run_migrations: bool,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let acquire_timeout_secs =
            parse_or(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?;
        let run_migrations = parse_or(&lookup, "DATABASE_RUN_MIGRATIONS", false)?;
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().with_context(|| format!("BIND_ADDR inválido: '{raw}'"))?,
            None => DEFAULT_BIND_ADDR.parse()?,
        };

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            run_migrations,
            bind_addr,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} inválida: '{raw}'")),
        None => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        if config.run_migrations {
            sqlx::migrate!()
                .run(&db_pool)
                .await
                .context("Falha ao rodar as migrações do banco de dados")?;
            tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
        }

        // --- Monta o gráfico de dependências ---
        let dashboard_repo = DashboardRepository::new(db_pool);
        let dashboard_service = DashboardService::new(Arc::new(dashboard_repo));

        Ok(Self { dashboard_service })
    }
}
