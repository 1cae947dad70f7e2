use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_INPUT: &str = "name";
pub const GREETING_OUTPUT: &str = "getrespmsg";
pub const STOCK_SYMBOL_INPUT: &str = "stockSymbol";
pub const STOCK_OUTPUT: &str = "stockData";

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_PREFIX: &str = "Error: ";

/// Body of `GET /app/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// What was written into an element, and through which property.
///
/// `Markup` is assigned as raw markup and is interpreted by the page;
/// `Text` is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Markup(String),
    Text(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Markup(s) | Content::Text(s) => s,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Content::Markup(_))
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Loading,
    Resolved,
    Errored,
}

impl RenderState {
    pub fn is_settled(self) -> bool {
        matches!(self, RenderState::Resolved | RenderState::Errored)
    }
}

/// Renders a failure the way the page shows it: the literal prefix followed by the error text.
pub fn error_text(err: &impl fmt::Display) -> String {
    format!("{}{}", ERROR_PREFIX, err)
}
