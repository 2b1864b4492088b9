//! Shared fixtures for label integration tests.

use rstest::fixture;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use taglabel::{PatternKind, Point, TapHandlers, TextLayout, UrlOpener};

struct NoopLogger;

impl log::Log for NoopLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }
    fn log(&self, _: &log::Record<'_>) {}
    fn flush(&self) {}
}

static LOGGER: NoopLogger = NoopLogger;
static INIT_LOGGER: Once = Once::new();

/// Install a logger that accepts and drops every record, so log macros run.
#[fixture]
pub fn logger() {
    INIT_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// A callback observed during a tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fired {
    Error(String),
    LabelTapped,
    Selected(String, PatternKind),
    Hashtag(String),
    Mention(String),
    Url(String),
    Custom(String, String),
}

/// Records every callback in firing order.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Fired>>>);

impl Recorder {
    /// Handlers with every callback, except `on_url`, wired to this recorder.
    pub fn handlers(&self) -> TapHandlers {
        let error = Rc::clone(&self.0);
        let tapped = Rc::clone(&self.0);
        let selected = Rc::clone(&self.0);
        let hashtag = Rc::clone(&self.0);
        let mention = Rc::clone(&self.0);
        let custom = Rc::clone(&self.0);
        TapHandlers::new()
            .on_error(move |message| error.borrow_mut().push(Fired::Error(message.to_owned())))
            .on_label_tapped(move |_| tapped.borrow_mut().push(Fired::LabelTapped))
            .on_pattern_selected(move |keyword, kind| {
                selected
                    .borrow_mut()
                    .push(Fired::Selected(keyword.to_owned(), kind));
            })
            .on_hashtag(move |keyword| hashtag.borrow_mut().push(Fired::Hashtag(keyword.to_owned())))
            .on_mention(move |keyword| mention.borrow_mut().push(Fired::Mention(keyword.to_owned())))
            .on_custom(move |keyword, pattern| {
                custom
                    .borrow_mut()
                    .push(Fired::Custom(keyword.to_owned(), pattern.to_owned()));
            })
    }

    /// Handlers from [`handlers`](Self::handlers) plus a recorded `on_url`.
    pub fn handlers_with_url(&self) -> TapHandlers {
        let url = Rc::clone(&self.0);
        self.handlers()
            .on_url(move |keyword| url.borrow_mut().push(Fired::Url(keyword.to_owned())))
    }

    /// Callbacks fired so far, draining the log.
    pub fn take(&self) -> Vec<Fired> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// URL opener that remembers what it was asked to open.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener(Rc<RefCell<Vec<String>>>);

impl RecordingOpener {
    /// URLs opened so far.
    pub fn opened(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.0.borrow_mut().push(url.to_owned());
    }
}

/// Single-line layout with fixed-width cells, one per code unit.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub cell_width: f64,
    pub line_height: f64,
    pub len: usize,
}

impl TextLayout for GridLayout {
    #[expect(
        clippy::float_arithmetic,
        reason = "fixed-width hit testing divides layout coordinates"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "coordinates are checked to be non-negative and small"
    )]
    fn offset_at(&self, point: Point) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 || point.y >= self.line_height {
            return None;
        }
        let offset = (point.x / self.cell_width).floor() as usize;
        (offset < self.len).then_some(offset)
    }
}
