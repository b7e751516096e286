use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::orcamento::models::OrcamentoForm;
use crate::AppState;

#[utoipa::path(
    tag = "Orçamento",
    get,
    path = "/",
    responses(
        (status = 200, description = "Formulário de orçamento", body = String, content_type = "text/html")
    )
)]
pub async fn exibir_formulario(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(data.form_html.clone())
}

#[utoipa::path(
    tag = "Orçamento",
    post,
    path = "/",
    request_body(
        content = OrcamentoForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Orçamento gerado, PDF como anexo", body = Vec<u8>, content_type = "application/pdf"),
        (status = 400, description = "Dados do formulário inválidos", body = String, content_type = "text/plain"),
        (status = 500, description = "Falha na geração do PDF", body = String, content_type = "text/plain")
    )
)]
pub async fn gerar_orcamento(
    form: web::Form<OrcamentoForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request_id = Uuid::new_v4();

    let orcamento = match form.into_inner().into_orcamento() {
        Ok(orcamento) => orcamento,
        Err(e) => {
            log::error!("[{request_id}] Formulário rejeitado: {e}");
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(e.to_string());
        }
    };

    // Conversion shells out to the converter binary; run it off the
    // request task on the blocking pool.
    let generator = data.generator.clone();
    match web::block(move || generator.generate(&orcamento)).await {
        Ok(Ok(doc)) => {
            log::info!(
                "[{request_id}] PDF gerado com sucesso: {} (emitido em {})",
                doc.filename,
                doc.data_emissao
            );
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", doc.filename),
                ))
                .body(doc.pdf)
        }
        Ok(Err(e)) => {
            log::error!("[{request_id}] Erro ao gerar PDF: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Erro ao gerar PDF: {e}"))
        }
        Err(e) => {
            log::error!("[{request_id}] Erro geral no processamento do formulário: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Erro ao processar o formulário: {e}"))
        }
    }
}
