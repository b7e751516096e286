//! Form DTO and the validated quote request.

use serde::Deserialize;
use utoipa::ToSchema;

use super::validation::{self, ValidationError};

/// Raw submission of the quote form. Field names follow the HTML form's
/// wire contract; every field arrives as optional text.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrcamentoForm {
    #[schema(example = "Maria da Silva")]
    pub nome_cliente: Option<String>,
    #[schema(example = "123.456.789-01")]
    pub cpf_cnpj_cliente: Option<String>,
    #[schema(example = "Consultoria de marketing digital")]
    pub descricao_servico: Option<String>,
    #[schema(example = "Pagamento em até 7 dias.")]
    pub observacoes: Option<String>,
    #[schema(example = "1000")]
    pub valor_total: Option<String>,
}

/// A validated quote request. Only ever constructed from a form that
/// passed every check, so `valor_total` is always strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Orcamento {
    pub nome_cliente: String,
    pub cpf_cnpj: Option<String>,
    pub descricao_servico: String,
    pub observacoes: Option<String>,
    pub valor_total: f64,
}

impl OrcamentoForm {
    /// Normalize and validate the submission. Checks run in order
    /// (required fields, numeric parse, positivity, tax id) and the first
    /// failure wins.
    pub fn into_orcamento(self) -> Result<Orcamento, ValidationError> {
        let nome_cliente = validation::normalize(self.nome_cliente);
        let cpf_cnpj = validation::normalize(self.cpf_cnpj_cliente);
        let descricao_servico = validation::normalize(self.descricao_servico);
        let observacoes = validation::normalize(self.observacoes);
        let valor_total = validation::normalize(self.valor_total);

        let (nome_cliente, descricao_servico, valor_total) =
            match (nome_cliente, descricao_servico, valor_total) {
                (Some(nome), Some(descricao), Some(valor)) => (nome, descricao, valor),
                _ => return Err(ValidationError::MissingRequiredField),
            };

        let valor_total = validation::parse_valor_total(&valor_total)?;

        if let Some(ref cpf_cnpj) = cpf_cnpj {
            validation::validate_cpf_cnpj(cpf_cnpj)?;
        }

        Ok(Orcamento {
            nome_cliente,
            cpf_cnpj,
            descricao_servico,
            observacoes,
            valor_total,
        })
    }
}
