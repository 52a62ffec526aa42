//! Expandable question / answer card of the FAQ page.

pub const EXPANDED_HEADER_BORDER: &str = "1px solid rgba(0, 0, 0, 0.19)";
pub const COLLAPSED_HEADER_BORDER: &str = "none";
const ANSWER_LINE_HEIGHT: f32 = 1.4;

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionProps {
    pub prompt: String,
    pub answer: String,
    pub should_display_expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView<'a> {
    pub title: &'a str,
    pub header_border: &'static str,
    pub answer: Option<&'a str>,
    pub line_height: f32,
}

#[derive(Debug, Clone)]
pub struct Question {
    props: QuestionProps,
    is_expanded: bool,
}

impl Question {
    pub fn new(props: QuestionProps) -> Self {
        let is_expanded = props.should_display_expanded;
        Self { props, is_expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// Expand-change event from the card header.
    pub fn toggle(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    pub fn render(&self) -> QuestionView<'_> {
        QuestionView {
            title: &self.props.prompt,
            header_border: if self.is_expanded {
                EXPANDED_HEADER_BORDER
            } else {
                COLLAPSED_HEADER_BORDER
            },
            answer: self.is_expanded.then_some(self.props.answer.as_str()),
            line_height: ANSWER_LINE_HEIGHT,
        }
    }
}
