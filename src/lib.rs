use std::env;
use std::fs;
use std::sync::Arc;

use actix_web::middleware::Compress;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod generators;
pub mod orcamento;

use crate::generators::common::get_static_dir;
use crate::generators::{GeneratorError, HtmlPdfEngine, OrcamentoGenerator, WeasyPrintEngine};

const FORM_FILE: &str = "form.html";

/// Server configuration, read from the environment with defaults.
/// None of these alter the request/response contract.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub weasyprint_bin: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            weasyprint_bin: env::var("WEASYPRINT_BIN").unwrap_or_else(|_| "weasyprint".to_string()),
        }
    }
}

/// Shared, immutable per-process state: the form page and the quote
/// generator. Nothing here is mutated across requests.
pub struct AppState {
    pub form_html: String,
    pub generator: Arc<OrcamentoGenerator>,
}

impl AppState {
    pub fn new(engine: Arc<dyn HtmlPdfEngine>) -> Result<Self, GeneratorError> {
        let form_path = get_static_dir().join(FORM_FILE);
        let form_html = fs::read_to_string(&form_path).map_err(GeneratorError::TemplateIo)?;
        let generator = Arc::new(OrcamentoGenerator::new(engine)?);
        Ok(Self {
            form_html,
            generator,
        })
    }
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::orcamento::handlers::exibir_formulario,
            crate::orcamento::handlers::gerar_orcamento,
        ),
        components(schemas(orcamento::models::OrcamentoForm)),
        tags(
            (name = "Orçamento", description = "Geração de orçamentos de serviço em PDF.")
        )
    )]
    struct ApiDoc;

    let config = ServerConfig::from_env();
    let engine = Arc::new(WeasyPrintEngine::new(config.weasyprint_bin.clone()));

    let app_state = match AppState::new(engine) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!(
                "Failed to load the HTML assets from static/. Nothing to serve without them. Error: {}",
                e
            );
            std::process::exit(1);
        }
    };

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        let app_state = app_state.clone();

        App::new()
            .wrap(Compress::default())
            .app_data(app_state)
            .service(
                web::resource("/")
                    .route(web::get().to(orcamento::handlers::exibir_formulario))
                    .route(web::post().to(orcamento::handlers::gerar_orcamento)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
