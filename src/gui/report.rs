//! Static report window: strength, progress, crack time and criteria list.

use iced::widget::{column, container, progress_bar, row, text, Column};
use iced::{font, Alignment, Element, Font, Length, Task, Theme};

use super::style::{to_color, ReportStyle};
use crate::types::{CriterionResult, PasswordAssessment};

pub const PASS_GLYPH: &str = "✔";
pub const FAIL_GLYPH: &str = "✘";

/// The window has nothing to react to.
#[derive(Debug, Clone, Copy)]
pub enum Message {}

/// Window state: the finished assessment and how to draw it.
pub struct ReportWindow {
    assessment: PasswordAssessment,
    style: ReportStyle,
}

impl ReportWindow {
    pub fn new(assessment: PasswordAssessment, style: ReportStyle) -> (Self, Task<Message>) {
        (Self { assessment, style }, Task::none())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {}
    }

    pub fn view(&self) -> Element<'_, Message> {
        let style = &self.style;
        let assessment = &self.assessment;
        let bold = Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        };

        let title = text("🔐 Password Strength")
            .size(style.title_size)
            .font(bold)
            .color(to_color(style.text));

        let strength = column![
            text(format!("Strength: {}", assessment.strength))
                .size(style.strength_size)
                .font(bold)
                .color(to_color(assessment.color)),
            progress_bar(0.0..=100.0, f32::from(assessment.score.percent()))
                .width(Length::Fixed(style.progress_width))
                .height(Length::Fixed(10.0))
                .style(style.progress_style(assessment.color)),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let crack_time = text(format!("⏱ Time to crack: {}", assessment.crack_time))
            .size(style.body_size)
            .color(to_color(style.accent));

        let criteria = Column::with_children(
            assessment
                .criteria
                .iter()
                .map(|criterion| criterion_line(criterion, style)),
        )
        .spacing(4);

        let panel = container(
            column![
                text("Security Criteria:")
                    .size(style.body_size)
                    .font(bold)
                    .color(to_color(style.text)),
                criteria,
            ]
            .spacing(8)
            .align_x(Alignment::Start),
        )
        .width(Length::Fill)
        .padding(15)
        .style(style.panel_style());

        container(
            column![title, strength, crack_time, panel]
                .spacing(18)
                .padding(20)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style.background_style())
        .into()
    }
}

fn criterion_line<'a>(criterion: &CriterionResult, style: &ReportStyle) -> Element<'a, Message> {
    let glyph = if criterion.passed { PASS_GLYPH } else { FAIL_GLYPH };
    let color = to_color(style.pass_or_fail(criterion.passed));

    row![
        text(glyph).size(style.criteria_size).color(color),
        text(criterion.name).size(style.criteria_size).color(color),
    ]
    .spacing(8)
    .into()
}
