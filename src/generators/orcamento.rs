//! Generator for the orçamento (service quote) document.
//!
//! Renders the HTML layout with the client's data and the two payment
//! totals, then hands the document to the HTML-to-PDF engine.

use std::fs;
use std::sync::Arc;

use crate::orcamento::models::Orcamento;

use super::common::{
    escape_html, format_data_emissao, get_static_dir, render_template, sanitize_client_name,
};
use super::engine::HtmlPdfEngine;
use super::{GeneratedDocument, GeneratorError};

const TEMPLATE_FILE: &str = "orcamento.html";

/// Fixed surcharge applied to the cash price to obtain the card price.
const TAXA_CARTAO: f64 = 0.05;

const CPF_CNPJ_FALLBACK: &str = "Não informado";
const OBSERVACOES_FALLBACK: &str = "Nenhuma observação fornecida.";

/// Generator for the quote PDF. Loads the layout asset once and keeps it
/// in memory for the lifetime of the process.
pub struct OrcamentoGenerator {
    template: String,
    engine: Arc<dyn HtmlPdfEngine>,
}

impl OrcamentoGenerator {
    pub fn new(engine: Arc<dyn HtmlPdfEngine>) -> Result<Self, GeneratorError> {
        let template_path = get_static_dir().join(TEMPLATE_FILE);
        let template = fs::read_to_string(&template_path).map_err(GeneratorError::TemplateIo)?;
        Ok(Self { template, engine })
    }

    /// Render the layout with the escaped quote values. All free-text
    /// fields (including the fallback placeholders) go through
    /// `escape_html` before interpolation.
    fn render_html(&self, orcamento: &Orcamento, data_emissao: &str) -> String {
        let valor_a_vista = format!("{:.2}", orcamento.valor_total);
        let valor_cartao = format!("{:.2}", orcamento.valor_total * (1.0 + TAXA_CARTAO));

        let nome_cliente = escape_html(&orcamento.nome_cliente);
        let cpf_cnpj = escape_html(orcamento.cpf_cnpj.as_deref().unwrap_or(CPF_CNPJ_FALLBACK));
        let descricao_servico = escape_html(&orcamento.descricao_servico);
        let observacoes = escape_html(
            orcamento
                .observacoes
                .as_deref()
                .unwrap_or(OBSERVACOES_FALLBACK),
        );

        render_template(
            &self.template,
            &[
                ("nome_cliente", nome_cliente.as_str()),
                ("cpf_cnpj", cpf_cnpj.as_str()),
                ("descricao_servico", descricao_servico.as_str()),
                ("observacoes", observacoes.as_str()),
                ("valor_a_vista", valor_a_vista.as_str()),
                ("valor_cartao", valor_cartao.as_str()),
                ("data_emissao", data_emissao),
            ],
        )
    }

    /// Generate the quote PDF for an already-validated request.
    pub fn generate(&self, orcamento: &Orcamento) -> Result<GeneratedDocument, GeneratorError> {
        let data_emissao = format_data_emissao();
        let html = self.render_html(orcamento, &data_emissao);
        let pdf = self.engine.convert(&html)?;

        let filename = format!(
            "orcamento_{}_{}.pdf",
            sanitize_client_name(&orcamento.nome_cliente),
            data_emissao.replace('/', "-"),
        );

        Ok(GeneratedDocument {
            filename,
            pdf,
            data_emissao,
        })
    }
}
