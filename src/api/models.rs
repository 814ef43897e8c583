use serde::{Deserialize, Serialize};

use crate::search::ResourceLink;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub resources: Vec<ResourceLink>,
}
