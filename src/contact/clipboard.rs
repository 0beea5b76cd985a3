//! Copy-to-clipboard with a legacy fallback.
//!
//! Browsers without `navigator.clipboard.writeText` (older engines, insecure
//! origins) still support selecting text in a textarea and running the
//! `copy` command. Copy failures never reach the caller as errors, they are
//! logged and reported as [`CopyOutcome::Failed`].

use log::{debug, error};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipboardError {
    #[error("Clipboard API is not available")]
    Unavailable,

    #[error("No document to stage the copy in")]
    NoDocument,

    #[error("Clipboard write failed: {0}")]
    NativeWrite(String),

    #[error("Failed to stage text for copying: {0}")]
    Staging(String),

    #[error("Copy command was rejected")]
    CommandRejected,

    #[error("Copy command failed: {0}")]
    CommandFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Native,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed,
}

/// Temporary selection surface used by the fallback path. It must take
/// itself out of the page when dropped.
pub trait StagingArea {
    fn select(&self) -> Result<(), ClipboardError>;
    fn exec_copy(&self) -> Result<(), ClipboardError>;
}

#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    type Staging: StagingArea;

    fn native_available(&self) -> bool;
    async fn write_native(&self, text: &str) -> Result<(), ClipboardError>;
    fn stage(&self, text: &str) -> Result<Self::Staging, ClipboardError>;
}

pub struct ClipboardCopier<B> {
    backend: B,
}

impl<B: ClipboardBackend> ClipboardCopier<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn copy(&self, text: &str) -> CopyOutcome {
        if self.backend.native_available() {
            match self.backend.write_native(text).await {
                Ok(()) => CopyOutcome::Copied(CopyPath::Native),
                Err(e) => {
                    error!("Failed to copy: {}", e);
                    CopyOutcome::Failed
                }
            }
        } else {
            debug!("Clipboard API missing, using selection fallback");
            match self.copy_with_fallback(text) {
                Ok(()) => CopyOutcome::Copied(CopyPath::Fallback),
                Err(e) => {
                    error!("Fallback copy failed: {}", e);
                    CopyOutcome::Failed
                }
            }
        }
    }

    fn copy_with_fallback(&self, text: &str) -> Result<(), ClipboardError> {
        let staging = self.backend.stage(text)?;
        staging.select()?;
        staging.exec_copy()
    }
}

const OFFSCREEN_STYLE: &str = "position: fixed; left: -999999px; top: -999999px;";

/// Clipboard access through the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClipboard;

pub struct OffscreenTextArea {
    element: HtmlTextAreaElement,
    document: Document,
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// navigator.clipboard is missing entirely on insecure origins, so probe it
// instead of calling through the typed binding.
fn native_clipboard() -> Option<JsValue> {
    let navigator = web_sys::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
    write_text.is_function().then_some(clipboard)
}

impl ClipboardBackend for WebClipboard {
    type Staging = OffscreenTextArea;

    fn native_available(&self) -> bool {
        native_clipboard().is_some()
    }

    async fn write_native(&self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = native_clipboard().ok_or(ClipboardError::Unavailable)?;
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| ClipboardError::NativeWrite(describe(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| ClipboardError::Unavailable)?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| ClipboardError::NativeWrite(describe(&e)))?
            .dyn_into::<Promise>()
            .map_err(|e| ClipboardError::NativeWrite(describe(&e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| ClipboardError::NativeWrite(describe(&e)))?;
        Ok(())
    }

    fn stage(&self, text: &str) -> Result<OffscreenTextArea, ClipboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ClipboardError::NoDocument)?;
        let body = document.body().ok_or(ClipboardError::NoDocument)?;
        let element = document
            .create_element("textarea")
            .map_err(|e| ClipboardError::Staging(describe(&e)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::Staging("created element is not a textarea".to_string()))?;

        // Owned from here on, so every exit below removes it again.
        let staging = OffscreenTextArea { element, document };
        staging.element.set_value(text);
        staging
            .element
            .set_attribute("style", OFFSCREEN_STYLE)
            .map_err(|e| ClipboardError::Staging(describe(&e)))?;
        body.append_child(&staging.element)
            .map_err(|e| ClipboardError::Staging(describe(&e)))?;
        Ok(staging)
    }
}

impl StagingArea for OffscreenTextArea {
    fn select(&self) -> Result<(), ClipboardError> {
        self.element
            .focus()
            .map_err(|e| ClipboardError::Staging(describe(&e)))?;
        self.element.select();
        Ok(())
    }

    fn exec_copy(&self) -> Result<(), ClipboardError> {
        let html_document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or(ClipboardError::NoDocument)?;
        match html_document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::CommandRejected),
            Err(e) => {
                gloo_console::error!("execCommand('copy') threw", e.clone());
                Err(ClipboardError::CommandFailed(describe(&e)))
            }
        }
    }
}

impl Drop for OffscreenTextArea {
    fn drop(&mut self) {
        self.element.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const NUMBER: &str = "+91 90874 11115";

    #[derive(Default, Clone)]
    struct FakePlatform {
        clipboard: Rc<RefCell<Option<String>>>,
        live_staging: Rc<Cell<usize>>,
        staged_total: Rc<Cell<usize>>,
    }

    struct FakeClipboard {
        platform: FakePlatform,
        native: bool,
        native_fails: bool,
        command_result: Result<bool, String>,
    }

    struct FakeStaging {
        text: String,
        command_result: Result<bool, String>,
        platform: FakePlatform,
    }

    impl FakeClipboard {
        fn new(native: bool) -> Self {
            Self {
                platform: FakePlatform::default(),
                native,
                native_fails: false,
                command_result: Ok(true),
            }
        }
    }

    impl ClipboardBackend for FakeClipboard {
        type Staging = FakeStaging;

        fn native_available(&self) -> bool {
            self.native
        }

        async fn write_native(&self, text: &str) -> Result<(), ClipboardError> {
            if self.native_fails {
                return Err(ClipboardError::NativeWrite("permission denied".to_string()));
            }
            *self.platform.clipboard.borrow_mut() = Some(text.to_string());
            Ok(())
        }

        fn stage(&self, text: &str) -> Result<FakeStaging, ClipboardError> {
            let platform = self.platform.clone();
            platform.live_staging.set(platform.live_staging.get() + 1);
            platform.staged_total.set(platform.staged_total.get() + 1);
            Ok(FakeStaging {
                text: text.to_string(),
                command_result: self.command_result.clone(),
                platform,
            })
        }
    }

    impl StagingArea for FakeStaging {
        fn select(&self) -> Result<(), ClipboardError> {
            Ok(())
        }

        fn exec_copy(&self) -> Result<(), ClipboardError> {
            match &self.command_result {
                Ok(true) => {
                    *self.platform.clipboard.borrow_mut() = Some(self.text.clone());
                    Ok(())
                }
                Ok(false) => Err(ClipboardError::CommandRejected),
                Err(reason) => Err(ClipboardError::CommandFailed(reason.clone())),
            }
        }
    }

    impl Drop for FakeStaging {
        fn drop(&mut self) {
            self.platform
                .live_staging
                .set(self.platform.live_staging.get() - 1);
        }
    }

    #[test]
    fn test_native_path() {
        let backend = FakeClipboard::new(true);
        let platform = backend.platform.clone();
        let copier = ClipboardCopier::new(backend);

        assert_eq!(block_on(copier.copy(NUMBER)), CopyOutcome::Copied(CopyPath::Native));
        assert_eq!(platform.clipboard.borrow().as_deref(), Some(NUMBER));
        assert_eq!(platform.staged_total.get(), 0);
    }

    #[test]
    fn test_native_failure_is_swallowed() {
        let mut backend = FakeClipboard::new(true);
        backend.native_fails = true;
        let platform = backend.platform.clone();
        let copier = ClipboardCopier::new(backend);

        assert_eq!(block_on(copier.copy(NUMBER)), CopyOutcome::Failed);
        assert!(platform.clipboard.borrow().is_none());
    }

    #[test]
    fn test_fallback_copies_and_cleans_up() {
        let backend = FakeClipboard::new(false);
        let platform = backend.platform.clone();
        let copier = ClipboardCopier::new(backend);

        assert_eq!(block_on(copier.copy(NUMBER)), CopyOutcome::Copied(CopyPath::Fallback));
        assert_eq!(platform.clipboard.borrow().as_deref(), Some(NUMBER));
        assert_eq!(platform.staged_total.get(), 1);
        assert_eq!(platform.live_staging.get(), 0);
    }

    #[test]
    fn test_fallback_cleans_up_when_command_rejected() {
        let mut backend = FakeClipboard::new(false);
        backend.command_result = Ok(false);
        let platform = backend.platform.clone();
        let copier = ClipboardCopier::new(backend);

        assert_eq!(block_on(copier.copy(NUMBER)), CopyOutcome::Failed);
        assert_eq!(platform.staged_total.get(), 1);
        assert_eq!(platform.live_staging.get(), 0);
    }

    #[test]
    fn test_fallback_cleans_up_when_command_throws() {
        let mut backend = FakeClipboard::new(false);
        backend.command_result = Err("SecurityError".to_string());
        let platform = backend.platform.clone();
        let copier = ClipboardCopier::new(backend);

        assert_eq!(block_on(copier.copy(NUMBER)), CopyOutcome::Failed);
        assert!(platform.clipboard.borrow().is_none());
        assert_eq!(platform.live_staging.get(), 0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::CommandFailed("SecurityError".to_string()).to_string(),
            "Copy command failed: SecurityError"
        );
        assert_eq!(ClipboardError::Unavailable.to_string(), "Clipboard API is not available");
    }
}
