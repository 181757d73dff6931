//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the expense endpoints and the health probes
//! - **Schemas**: the request and response bodies plus domain type wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::expenses::{
    CategorySummaryBody, ExpenseBody, ExpenseRequestBody, MonthlySummaryBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spendwise API",
        description = "Record, correct, and summarise personal expenses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::expenses::list_expenses,
        crate::inbound::http::expenses::summarize_by_category,
        crate::inbound::http::expenses::summarize_by_month,
        crate::inbound::http::expenses::get_expense,
        crate::inbound::http::expenses::create_expense,
        crate::inbound::http::expenses::update_expense_by_query,
        crate::inbound::http::expenses::update_expense,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ExpenseRequestBody,
        ExpenseBody,
        CategorySummaryBody,
        MonthlySummaryBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "expenses", description = "Expense records and summaries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    #[case::id("id")]
    #[case::title("title")]
    #[case::amount("amount")]
    #[case::category("category")]
    #[case::expense_date("expense_date")]
    #[case::description("description")]
    #[case::payment_method("payment_method")]
    fn openapi_expense_schema_lists_record_fields(#[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let expense = schemas.get("ExpenseBody").expect("ExpenseBody schema");

        assert_object_schema_has_field(expense, field);
    }

    #[rstest]
    #[case::collection("/expenses")]
    #[case::item("/expenses/{id}")]
    #[case::by_category("/expenses/summary/category")]
    #[case::by_month("/expenses/summary/monthly")]
    #[case::readiness("/health/ready")]
    #[case::liveness("/health/live")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
