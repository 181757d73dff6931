//! Expense HTTP handlers.
//!
//! ```text
//! GET  /expenses
//! GET  /expenses/summary/category
//! GET  /expenses/summary/monthly
//! GET  /expenses/{id}
//! POST /expenses
//! PUT  /expenses?id={id}
//! PUT  /expenses/{id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{CreateExpenseRequest, GetExpenseRequest, UpdateExpenseRequest};
use crate::domain::{CategorySummary, Error, Expense, ExpenseId, ExpensePayload, MonthlySummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, json_config, path_config, query_config, require};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request payload for creating or replacing an expense.
///
/// Required fields are optional here so a missing one is reported as
/// `missing_field` rather than a generic deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ExpenseRequestBody {
    #[schema(example = "Coffee")]
    pub title: Option<String>,
    #[schema(example = 5)]
    pub amount: Option<i64>,
    /// Case-insensitive category name.
    #[schema(example = "food")]
    pub category: Option<String>,
    /// Calendar date; defaults to today when omitted.
    #[serde(alias = "date")]
    #[schema(format = "date", example = "2026-03-01")]
    pub expense_date: Option<String>,
    /// Free text; send `""` for none.
    #[schema(example = "Morning")]
    pub description: Option<String>,
    /// Case-insensitive payment method name.
    #[schema(example = "cash")]
    pub payment_method: Option<String>,
}

/// Stored expense as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ExpenseBody {
    #[schema(example = 6)]
    pub id: i64,
    pub title: String,
    pub amount: i64,
    #[schema(example = "Food")]
    pub category: String,
    #[schema(format = "date", example = "2026-03-01")]
    pub expense_date: String,
    pub description: String,
    #[schema(example = "Cash")]
    pub payment_method: String,
}

/// Spend total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CategorySummaryBody {
    #[schema(example = "Food")]
    pub category: String,
    pub total: i64,
    pub count: u64,
}

/// Spend total for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MonthlySummaryBody {
    #[schema(example = "2026-02")]
    pub month: String,
    pub total: i64,
    pub count: u64,
}

/// Query string naming the expense to replace.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseIdQuery {
    /// Identifier of the expense to replace.
    pub id: i64,
}

impl From<Expense> for ExpenseBody {
    fn from(value: Expense) -> Self {
        Self {
            id: value.id().get(),
            title: value.title().to_owned(),
            amount: value.amount(),
            category: value.category().to_string(),
            expense_date: value.expense_date().format(DATE_FORMAT).to_string(),
            description: value.description().to_owned(),
            payment_method: value.payment_method().to_string(),
        }
    }
}

impl From<CategorySummary> for CategorySummaryBody {
    fn from(value: CategorySummary) -> Self {
        Self {
            category: value.category.to_string(),
            total: value.total,
            count: value.count,
        }
    }
}

impl From<MonthlySummary> for MonthlySummaryBody {
    fn from(value: MonthlySummary) -> Self {
        Self {
            month: value.month,
            total: value.total,
            count: value.count,
        }
    }
}

fn parse_expense_payload(body: ExpenseRequestBody) -> Result<ExpensePayload, Error> {
    Ok(ExpensePayload {
        title: require(body.title, FieldName::new("title"))?,
        amount: require(body.amount, FieldName::new("amount"))?,
        category: require(body.category, FieldName::new("category"))?,
        expense_date: body.expense_date,
        description: require(body.description, FieldName::new("description"))?,
        payment_method: require(body.payment_method, FieldName::new("payment_method"))?,
    })
}

/// Register the expense routes and their extractor error handlers.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use spendwise_backend::inbound::http::expenses;
///
/// let _app = App::new().configure(expenses::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(list_expenses)
        .service(summarize_by_category)
        .service(summarize_by_month)
        .service(get_expense)
        .service(create_expense)
        .service(update_expense_by_query)
        .service(update_expense);
}

/// List every expense in insertion order.
#[utoipa::path(
    get,
    path = "/expenses",
    responses(
        (status = 200, description = "All expenses", body = [ExpenseBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "listExpenses"
)]
#[get("/expenses")]
pub async fn list_expenses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ExpenseBody>>> {
    let response = state.expenses_query.list_expenses().await?;
    Ok(web::Json(
        response.expenses.into_iter().map(ExpenseBody::from).collect(),
    ))
}

/// Total spend per category.
#[utoipa::path(
    get,
    path = "/expenses/summary/category",
    responses(
        (status = 200, description = "Spend grouped by category", body = [CategorySummaryBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "summarizeExpensesByCategory"
)]
#[get("/expenses/summary/category")]
pub async fn summarize_by_category(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CategorySummaryBody>>> {
    let response = state.expenses_query.summarize_by_category().await?;
    Ok(web::Json(
        response
            .categories
            .into_iter()
            .map(CategorySummaryBody::from)
            .collect(),
    ))
}

/// Total spend per calendar month.
#[utoipa::path(
    get,
    path = "/expenses/summary/monthly",
    responses(
        (status = 200, description = "Spend grouped by month", body = [MonthlySummaryBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "summarizeExpensesByMonth"
)]
#[get("/expenses/summary/monthly")]
pub async fn summarize_by_month(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<MonthlySummaryBody>>> {
    let response = state.expenses_query.summarize_by_month().await?;
    Ok(web::Json(
        response
            .months
            .into_iter()
            .map(MonthlySummaryBody::from)
            .collect(),
    ))
}

/// Fetch one expense.
#[utoipa::path(
    get,
    path = "/expenses/{id}",
    params(("id" = i64, Path, description = "Expense identifier")),
    responses(
        (status = 200, description = "Expense found", body = ExpenseBody),
        (status = 404, description = "No expense has this identifier", body = ErrorSchema),
        (status = 422, description = "Identifier is not an integer", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "getExpense"
)]
#[get("/expenses/{id}")]
pub async fn get_expense(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ExpenseBody>> {
    let id = ExpenseId::new(path.into_inner());
    let response = state
        .expenses_query
        .get_expense(GetExpenseRequest { id })
        .await?;
    Ok(web::Json(ExpenseBody::from(response.expense)))
}

/// Create an expense and return it with its assigned identifier.
#[utoipa::path(
    post,
    path = "/expenses",
    request_body = ExpenseRequestBody,
    responses(
        (status = 201, description = "Expense created", body = ExpenseBody),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 422, description = "A field failed validation", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "createExpense"
)]
#[post("/expenses")]
pub async fn create_expense(
    state: web::Data<HttpState>,
    payload: web::Json<ExpenseRequestBody>,
) -> ApiResult<HttpResponse> {
    let expense = parse_expense_payload(payload.into_inner())?;
    let response = state
        .expenses
        .create_expense(CreateExpenseRequest { expense })
        .await?;
    Ok(HttpResponse::Created().json(ExpenseBody::from(response.expense)))
}

async fn replace_expense(
    state: &HttpState,
    id: i64,
    body: ExpenseRequestBody,
) -> ApiResult<web::Json<ExpenseBody>> {
    let expense = parse_expense_payload(body)?;
    let response = state
        .expenses
        .update_expense(UpdateExpenseRequest {
            id: ExpenseId::new(id),
            expense,
        })
        .await?;
    Ok(web::Json(ExpenseBody::from(response.expense)))
}

/// Replace every field of an expense named by the `id` query parameter.
#[utoipa::path(
    put,
    path = "/expenses",
    params(ExpenseIdQuery),
    request_body = ExpenseRequestBody,
    responses(
        (status = 200, description = "Expense replaced", body = ExpenseBody),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 404, description = "No expense has this identifier", body = ErrorSchema),
        (status = 422, description = "A field or the identifier failed validation", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "updateExpenseByQuery"
)]
#[put("/expenses")]
pub async fn update_expense_by_query(
    state: web::Data<HttpState>,
    query: web::Query<ExpenseIdQuery>,
    payload: web::Json<ExpenseRequestBody>,
) -> ApiResult<web::Json<ExpenseBody>> {
    replace_expense(&state, query.id, payload.into_inner()).await
}

/// Replace every field of an expense named in the path.
#[utoipa::path(
    put,
    path = "/expenses/{id}",
    params(("id" = i64, Path, description = "Expense identifier")),
    request_body = ExpenseRequestBody,
    responses(
        (status = 200, description = "Expense replaced", body = ExpenseBody),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 404, description = "No expense has this identifier", body = ErrorSchema),
        (status = 422, description = "A field or the identifier failed validation", body = ErrorSchema)
    ),
    tags = ["expenses"],
    operation_id = "updateExpense"
)]
#[put("/expenses/{id}")]
pub async fn update_expense(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ExpenseRequestBody>,
) -> ApiResult<web::Json<ExpenseBody>> {
    replace_expense(&state, path.into_inner(), payload.into_inner()).await
}

#[cfg(test)]
#[path = "expenses_tests.rs"]
mod tests;
