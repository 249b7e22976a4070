use serde::{Deserialize, Serialize};

/// Description of one callable tool, shaped like the JSON-schema tool
/// declarations AI clients expect
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ToolDTO {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

pub mod list_tools {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub tools: Vec<ToolDTO>,
    }
}

pub mod execute_tool {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub tool_name: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub params: Option<serde_json::Value>,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub result: serde_json::Value,
    }
}
