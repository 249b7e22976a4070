use crate::error::PlazoError;
use crate::shared::auth::protect_tool_route;
use crate::shared::usecase::execute;
use crate::transaction::create_transaction::CreateTransactionUseCase;
use crate::transaction::get_transaction_stats::GetTransactionStatsUseCase;
use crate::transaction::list_transactions::ListTransactionsUseCase;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use plazo_api_structs::dtos::{TransactionDTO, TransactionStatsDTO};
use plazo_api_structs::{execute_tool, list_tools, ToolDTO};
use plazo_domain::{Payload, Priority, ID};
use plazo_infra::PlazoContext;
use serde::Deserialize;
use serde_json::json;

/// The tool surface exposed to external AI clients: a listing of callable
/// tools with JSON-schema parameter docs, and an execution endpoint gated by
/// the shared api key. Tools only ever compose the store's public use cases.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tools", web::get().to(list_tools_controller));
    cfg.route("/tools/{tool_name}", web::post().to(execute_tool_controller));
}

fn tool_catalog() -> Vec<ToolDTO> {
    vec![
        ToolDTO {
            name: "get_transactions".into(),
            description: "List a user's tracked transactions, soonest deadline first".into(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "ownerId": { "type": "integer" },
                    "status": { "type": "string", "enum": ["active", "completed", "cancelled"] },
                    "limit": { "type": "integer" }
                },
                "required": ["ownerId"]
            }),
        },
        ToolDTO {
            name: "add_transaction".into(),
            description: "Track a new transaction and schedule its reminders".into(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "ownerId": { "type": "integer" },
                    "transactionTypeId": { "type": "string" },
                    "title": { "type": "string" },
                    "description": { "type": "string" },
                    "endDate": { "type": "string", "format": "date" },
                    "priority": { "type": "string", "enum": ["normal", "high", "critical"] }
                },
                "required": ["ownerId", "transactionTypeId", "title"]
            }),
        },
        ToolDTO {
            name: "analyze_transactions".into(),
            description: "Summarise a user's transactions: counts, pressure points and the nearest deadlines".into(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "ownerId": { "type": "integer" }
                },
                "required": ["ownerId"]
            }),
        },
    ]
}

async fn list_tools_controller(
    http_req: HttpRequest,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    protect_tool_route(&http_req, &ctx)?;

    Ok(HttpResponse::Ok().json(list_tools::APIResponse {
        tools: tool_catalog(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetTransactionsParams {
    owner_id: i64,
    status: Option<plazo_domain::TransactionStatus>,
    limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTransactionParams {
    owner_id: i64,
    transaction_type_id: ID,
    title: String,
    description: Option<String>,
    end_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeTransactionsParams {
    owner_id: i64,
}

fn parse_params<T: serde::de::DeserializeOwned>(
    params: Option<serde_json::Value>,
) -> Result<T, PlazoError> {
    serde_json::from_value(params.unwrap_or_else(|| json!({})))
        .map_err(|e| PlazoError::BadClientData(format!("Invalid tool parameters: {}", e)))
}

async fn execute_tool_controller(
    http_req: HttpRequest,
    path_params: web::Path<execute_tool::PathParams>,
    body: web::Json<execute_tool::RequestBody>,
    ctx: web::Data<PlazoContext>,
) -> Result<HttpResponse, PlazoError> {
    protect_tool_route(&http_req, &ctx)?;

    let params = body.0.params;
    let result = match path_params.tool_name.as_str() {
        "get_transactions" => get_transactions(parse_params(params)?, &ctx).await?,
        "add_transaction" => add_transaction(parse_params(params)?, &ctx).await?,
        "analyze_transactions" => analyze_transactions(parse_params(params)?, &ctx).await?,
        unknown => {
            return Err(PlazoError::NotFound(format!(
                "The tool: {}, was not found.",
                unknown
            )))
        }
    };

    Ok(HttpResponse::Ok().json(execute_tool::APIResponse { result }))
}

async fn get_transactions(
    params: GetTransactionsParams,
    ctx: &PlazoContext,
) -> Result<serde_json::Value, PlazoError> {
    let usecase = ListTransactionsUseCase {
        owner_id: params.owner_id,
        transaction_type_id: None,
        status: params.status,
        priority: None,
        limit: params.limit,
    };
    let transactions = execute(usecase, ctx).await.map_err(PlazoError::from)?;

    let dtos: Vec<TransactionDTO> = transactions.into_iter().map(TransactionDTO::new).collect();
    Ok(json!({ "transactions": dtos }))
}

async fn add_transaction(
    params: AddTransactionParams,
    ctx: &PlazoContext,
) -> Result<serde_json::Value, PlazoError> {
    let usecase = CreateTransactionUseCase {
        transaction_type_id: params.transaction_type_id,
        owner_id: params.owner_id,
        responsible_id: None,
        title: params.title,
        description: params.description.unwrap_or_default(),
        payload: Payload::default(),
        start_date: None,
        end_date: params.end_date,
        priority: params.priority.unwrap_or_default(),
    };
    let transaction = execute(usecase, ctx).await.map_err(PlazoError::from)?;

    Ok(json!({ "transaction": TransactionDTO::new(transaction) }))
}

async fn analyze_transactions(
    params: AnalyzeTransactionsParams,
    ctx: &PlazoContext,
) -> Result<serde_json::Value, PlazoError> {
    let stats = execute(
        GetTransactionStatsUseCase {
            owner_id: Some(params.owner_id),
        },
        ctx,
    )
    .await
    .map_err(PlazoError::from)?;

    let upcoming = execute(
        ListTransactionsUseCase {
            owner_id: params.owner_id,
            transaction_type_id: None,
            status: Some(plazo_domain::TransactionStatus::Active),
            priority: None,
            limit: Some(5),
        },
        ctx,
    )
    .await
    .map_err(PlazoError::from)?;

    let summary = format!(
        "{} active transactions, {} due within the next week, {} reminders pending",
        stats.active, stats.due_within_week, stats.pending_reminders
    );
    let upcoming: Vec<TransactionDTO> = upcoming.into_iter().map(TransactionDTO::new).collect();

    Ok(json!({
        "summary": summary,
        "stats": TransactionStatsDTO {
            active: stats.active,
            completed: stats.completed,
            cancelled: stats.cancelled,
            high_priority: stats.high_priority,
            critical_priority: stats.critical_priority,
            due_within_week: stats.due_within_week,
            pending_reminders: stats.pending_reminders,
        },
        "upcoming": upcoming,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_the_three_tools() {
        let names: Vec<_> = tool_catalog().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["get_transactions", "add_transaction", "analyze_transactions"]
        );
    }

    #[test]
    fn params_parse_from_camel_case_json() {
        let params: AddTransactionParams = parse_params(Some(json!({
            "ownerId": 42,
            "transactionTypeId": "71f4dfd4-b233-4e5e-ae26-e5d76ffa65cd",
            "title": "Work visa",
            "endDate": "2025-06-30"
        })))
        .unwrap();

        assert_eq!(params.owner_id, 42);
        assert_eq!(
            params.end_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
        );
        assert!(params.priority.is_none());
    }

    #[test]
    fn missing_required_params_are_rejected() {
        let res: Result<AnalyzeTransactionsParams, _> = parse_params(None);
        assert!(res.is_err());
    }
}
