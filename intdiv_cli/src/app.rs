//! State of the live TUI.
//!
//! Owns the two operand texts and re-evaluates on every edit. Key handling
//! is reduced to [`Action`]s so the state can be exercised without a terminal.

use intdiv_core::slides::{NavKey, SlideNavigator};
use intdiv_core::{evaluate, DisplaySettings, DivResult, DivisionResult, Readout};
use log::{debug, trace};

/// Pages the arrow keys move between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Results,
    Remainders,
    Reference,
}

impl Page {
    pub(crate) const ALL: [Page; 3] = [Page::Results, Page::Remainders, Page::Reference];

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Page::Results => "Results",
            Page::Remainders => "Quotient and remainder per policy",
            Page::Reference => "Rounding policies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Dividend,
    Divisor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Insert(char),
    Backspace,
    ClearInput,
    ToggleFocus,
    Navigate(NavKey),
    Quit,
}

#[derive(Debug)]
pub(crate) struct App {
    pub(crate) x_text: String,
    pub(crate) y_text: String,
    pub(crate) focus: Focus,
    pub(crate) settings: DisplaySettings,
    pub(crate) outcome: DivResult<DivisionResult>,
    pub(crate) readout: Readout,
    pub(crate) slides: SlideNavigator,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new(settings: DisplaySettings) -> Self {
        let x_text = settings.initial_x.clone();
        let y_text = settings.initial_y.clone();
        let outcome = evaluate(&x_text, &y_text);
        let readout = Readout::from_outcome(&outcome);

        App {
            x_text,
            y_text,
            focus: Focus::Dividend,
            settings,
            outcome,
            readout,
            slides: SlideNavigator::with_location(Page::ALL.len() as u64, "#slide-0"),
            should_quit: false,
        }
    }

    pub(crate) fn page(&self) -> Page {
        let index = self.slides.current_slide() as usize;
        Page::ALL.get(index).copied().unwrap_or(Page::Results)
    }

    pub(crate) fn focused_text(&self) -> &str {
        match self.focus {
            Focus::Dividend => &self.x_text,
            Focus::Divisor => &self.y_text,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Dividend => &mut self.x_text,
            Focus::Divisor => &mut self.y_text,
        }
    }

    pub(crate) fn apply(&mut self, action: Action) {
        trace!("action {:?}", action);
        match action {
            Action::Insert(c) => {
                self.focused_text_mut().push(c);
                self.recompute();
            }
            Action::Backspace => {
                if self.focused_text_mut().pop().is_some() {
                    self.recompute();
                }
            }
            Action::ClearInput => {
                self.focused_text_mut().clear();
                self.recompute();
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Dividend => Focus::Divisor,
                    Focus::Divisor => Focus::Dividend,
                };
            }
            Action::Navigate(key) => {
                if let Some(slide) = self.slides.handle_key(key) {
                    debug!("now at {} ({})", self.slides.location(), slide);
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn recompute(&mut self) {
        self.outcome = evaluate(&self.x_text, &self.y_text);
        self.readout = Readout::from_outcome(&self.outcome);
        if let Err(e) = &self.outcome {
            debug!("{} / {}: {}", self.x_text, self.y_text, e);
        }
    }
}
