//! The event loop: [`Model`], [`Driver`], [`Effect`], [`App`].
//!
//! Messages are handled strictly one at a time, in arrival order. A model's
//! `update` always runs to completion before the next message is taken off
//! the queue, so state changes made by one event never interleave with the
//! next.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug)]
pub enum Effect {
    /// Queue a follow-up message behind the ones already pending.
    Msg(Msg),
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model / Driver
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;
}

/// Back-end driver (e.g. a terminal) that feeds input and shows the model.
pub trait Driver<M: Model> {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Poll for input messages, sending them through `tx`.
    /// The implementation should honour `ctx.is_done()` and return when it
    /// becomes `true`.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Present the current model state.
    fn draw(&mut self, model: &M) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application runner.
pub struct App<M: Model, D: Driver<M>> {
    model: M,
    driver: D,
}

impl<M: Model, D: Driver<M>> App<M, D> {
    /// Create a new application.
    pub fn new(model: M, driver: D) -> Self {
        Self { model, driver }
    }

    /// The model being run.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the app, returning the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Run the main Model-View-Update loop.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends `Msg::Init` through the model.
    /// 3. Enters the event loop: poll → update → draw.
    /// 4. Stops when the model returns `Effect::End`.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;

        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();

        tx.send(Msg::Init).ok();
        if let Err(e) = self.process_pending(&rx, &ctx, &tx) {
            self.driver.close();
            return Err(e);
        }

        while !ctx.is_done() {
            if let Err(e) = self.driver.poll_msgs(&ctx, &tx) {
                ctx.cancel();
                self.driver.close();
                return Err(e);
            }

            if ctx.is_done() {
                break;
            }

            if let Err(e) = self.process_pending(&rx, &ctx, &tx) {
                self.driver.close();
                return Err(e);
            }
        }

        self.driver.close();
        Ok(())
    }

    /// Drain queued messages, update the model, and draw once.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            needs_draw = true;
            match self.model.update(msg) {
                Some(Effect::End) => {
                    ctx.cancel();
                    return Ok(());
                }
                Some(Effect::Msg(follow_up)) => {
                    tx.send(follow_up).ok();
                }
                None => {}
            }
        }

        if needs_draw {
            self.driver.draw(&self.model)?;
        }

        Ok(())
    }
}
