use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::errors::{OcwmError, Result};
use crate::models::{Output, View, ViewHandle, Xyhw, FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::DisplayEvent;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

/// Size of the virtual output, as `WIDTHxHEIGHT`.
const OUTPUT_ENV: &str = "OCWM_HEADLESS_OUTPUT";
const OUTPUT_NAME: &str = "HEADLESS-1";
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// A view's node in the headless scene.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessNode {
    pub handle: ViewHandle,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub enabled: bool,
}

/// Backend without real outputs or clients: one virtual output, a frame
/// clock, and a scene that follows the actions it is given. Clients are
/// simulated with [`HeadlessDisplayServer::open_view`].
#[derive(Debug)]
pub struct HeadlessDisplayServer {
    output: Output,
    /// Bottom to top.
    nodes: Vec<HeadlessNode>,
    pending: Vec<DisplayEvent>,
    next_handle: u32,
    started: Instant,
    next_frame: Instant,
    frame_clock: bool,
    #[cfg(test)]
    pub(crate) executed: Vec<DisplayAction>,
}

impl HeadlessDisplayServer {
    #[must_use]
    pub fn with_output(width: i32, height: i32) -> Self {
        let output = Output::new(OUTPUT_NAME, width, height);
        let now = Instant::now();
        Self {
            pending: vec![DisplayEvent::OutputAttached(output.clone())],
            output,
            nodes: vec![],
            next_handle: 1,
            started: now,
            next_frame: now + FRAME_INTERVAL,
            frame_clock: true,
            #[cfg(test)]
            executed: vec![],
        }
    }

    /// Stops emitting frame ticks on its own.
    #[must_use]
    pub fn without_frame_clock(mut self) -> Self {
        self.frame_clock = false;
        self
    }

    #[must_use]
    pub fn node(&self, handle: ViewHandle) -> Option<&HeadlessNode> {
        self.nodes.iter().find(|n| n.handle == handle)
    }

    /// Simulates a client creating and mapping a toplevel of the given size.
    pub fn open_view(&mut self, title: Option<&str>, app_id: Option<&str>, w: i32, h: i32) -> ViewHandle {
        let handle = ViewHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.push(HeadlessNode {
            handle,
            x: 0,
            y: 0,
            w,
            h,
            enabled: true,
        });

        let mut view = View::new(handle, title.map(str::to_owned), app_id.map(str::to_owned));
        view.geometry = Xyhw::new(0, 0, w, h);
        self.pending.push(DisplayEvent::ViewCreate(view));
        self.pending.push(DisplayEvent::ViewMap(handle));
        handle
    }

    /// Simulates a client going away.
    pub fn close_view(&mut self, handle: ViewHandle) {
        if self.remove_node(handle) {
            self.pending.push(DisplayEvent::ViewUnmap(handle));
            self.pending.push(DisplayEvent::ViewDestroy(handle));
        }
    }

    fn remove_node(&mut self, handle: ViewHandle) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.handle != handle);
        before != self.nodes.len()
    }

    fn node_mut(&mut self, handle: ViewHandle) -> Option<&mut HeadlessNode> {
        self.nodes.iter_mut().find(|n| n.handle == handle)
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

fn parse_output_size(value: &str) -> Result<(i32, i32)> {
    let invalid = || OcwmError::Backend(format!("{OUTPUT_ENV} must look like 1920x1080, got {value:?}"));
    let (w, h) = value.split_once('x').ok_or_else(invalid)?;
    let w: i32 = w.trim().parse().map_err(|_| invalid())?;
    let h: i32 = h.trim().parse().map_err(|_| invalid())?;
    if w <= 0 || h <= 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

impl DisplayServer for HeadlessDisplayServer {
    fn new() -> Result<Self> {
        let (width, height) = match std::env::var(OUTPUT_ENV) {
            Ok(value) => parse_output_size(&value)?,
            Err(_) => (FALLBACK_WIDTH, FALLBACK_HEIGHT),
        };
        tracing::info!("Headless output {}x{}", width, height);
        Ok(Self::with_output(width, height))
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        let mut events = std::mem::take(&mut self.pending);
        if self.frame_clock && Instant::now() >= self.next_frame {
            self.next_frame += FRAME_INTERVAL;
            events.push(DisplayEvent::Frame(self.elapsed_ms()));
        }
        events
    }

    fn execute_action(&mut self, act: DisplayAction) {
        #[cfg(test)]
        self.executed.push(act.clone());
        match act {
            DisplayAction::MoveView(handle, x, y) => {
                if let Some(node) = self.node_mut(handle) {
                    node.x = x;
                    node.y = y;
                }
            }
            DisplayAction::ResizeView(handle, w, h) => {
                if let Some(node) = self.node_mut(handle) {
                    node.w = w;
                    node.h = h;
                }
            }
            DisplayAction::SetVisible(handle, enabled) => {
                if let Some(node) = self.node_mut(handle) {
                    node.enabled = enabled;
                }
            }
            DisplayAction::RaiseView(handle) => {
                if let Some(index) = self.nodes.iter().position(|n| n.handle == handle) {
                    let node = self.nodes.remove(index);
                    self.nodes.push(node);
                }
            }
            DisplayAction::CloseView(handle) => self.close_view(handle),
            _ => {}
        }
    }

    fn view_at(&self, x: f64, y: f64) -> Option<(ViewHandle, f64, f64)> {
        self.nodes
            .iter()
            .rev()
            .filter(|n| n.enabled)
            .find(|n| Xyhw::new(n.x, n.y, n.w, n.h).contains_point(x, y))
            .map(|n| (n.handle, x - f64::from(n.x), y - f64::from(n.y)))
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        if !self.pending.is_empty() {
            return Box::pin(std::future::ready(()));
        }
        let deadline = tokio::time::Instant::from_std(self.next_frame);
        Box::pin(tokio::time::sleep_until(deadline))
    }

    fn flush(&self) {}

    fn shutdown(&mut self) {
        tracing::info!("Releasing headless output {}", self.output.name);
        self.nodes.clear();
        self.pending.clear();
    }
}
