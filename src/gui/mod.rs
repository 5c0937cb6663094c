//! Desktop report window (iced).
//!
//! [`show`] blocks inside the iced event loop until the user closes the
//! window.

mod report;
mod style;

use iced::window;
use thiserror::Error;

use crate::types::PasswordAssessment;

pub use report::{ReportWindow, FAIL_GLYPH, PASS_GLYPH};
pub use style::ReportStyle;

pub const WINDOW_TITLE: &str = "Password Strength Analysis";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to open report window: {0}")]
    Window(#[from] iced::Error),
}

/// Opens the report window for `assessment` and waits until it is closed.
///
/// # Errors
///
/// Returns [`ReportError::Window`] if the window or its renderer cannot be
/// created, e.g. when no display is available.
pub fn show(assessment: PasswordAssessment, style: ReportStyle) -> Result<(), ReportError> {
    tracing::info!(
        "Opening report window ({}x{})",
        style.window_size.width,
        style.window_size.height
    );

    iced::application(WINDOW_TITLE, ReportWindow::update, ReportWindow::view)
        .theme(ReportWindow::theme)
        .window(window::Settings {
            size: style.window_size,
            resizable: false,
            ..window::Settings::default()
        })
        .run_with(move || ReportWindow::new(assessment, style))?;

    tracing::info!("Report window closed");
    Ok(())
}
