//! Terminal rendering of the client view.

use colored::*;

use crate::api::dto::HealthDescriptor;

use super::state::ViewState;

/// Visual class of the reported status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Ok,
    NotOk,
}

impl StatusClass {
    pub fn of(descriptor: &HealthDescriptor) -> Self {
        if descriptor.is_ok() {
            StatusClass::Ok
        } else {
            StatusClass::NotOk
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Ok => "ok",
            StatusClass::NotOk => "not-ok",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            StatusClass::Ok => text.green().bold(),
            StatusClass::NotOk => text.red().bold(),
        }
    }
}

/// Renders the view as terminal text.
///
/// - `Loading`: a loading line and a disabled refresh trigger
/// - `Error`: the message, no descriptor fields
/// - `Loaded`: service, status (colored by [`StatusClass`]) and message
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Driver Checker status".bright_blue().bold()));

    match state {
        ViewState::Loading => {
            out.push_str(&format!("{}\n", "Loading status...".dimmed()));
        }
        ViewState::Error(message) => {
            out.push_str(&format!("{} {}\n", "Error:".red().bold(), message));
        }
        ViewState::Loaded(descriptor) => {
            let class = StatusClass::of(descriptor);
            out.push_str(&format!("  Service: {}\n", descriptor.service));
            out.push_str(&format!(
                "  Status:  {} [{}]\n",
                class.paint(&descriptor.status),
                class.as_str()
            ));
            out.push_str(&format!("  Message: {}\n", descriptor.message));
        }
    }

    out.push_str(&render_trigger(state));
    out
}

fn render_trigger(state: &ViewState) -> String {
    if state.can_refresh() {
        format!("{}\n", "[ Refresh ]".cyan())
    } else {
        format!("{}\n", "[ Refreshing... ] (disabled)".dimmed())
    }
}
