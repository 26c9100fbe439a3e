//! User authentication settings data models

use serde::{Deserialize, Serialize};

/// The cookie-authentication exempt URL list
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ExemptedUrls {
    pub urls: Vec<String>,
}

/// Action applied to the exempt list by a modification call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlListAction {
    Add,
    Remove,
}

impl UrlListAction {
    /// Wire value of the `action` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlListAction::Add => "ADD_TO_LIST",
            UrlListAction::Remove => "REMOVE_FROM_LIST",
        }
    }
}
