//! Render surfaces for workflow snapshots.

mod scene;
mod writer;

use std::io;

use tokio::sync::watch;

use crate::workflow::WorkflowState;

pub use scene::{Color, MapScene, Marker, Notice, Polyline, Region, FIT_PADDING, MIN_DELTA};
pub use writer::{JsonPresenter, TextPresenter};

/// Anything that can draw a [`MapScene`].
///
/// Presenters only read; they never hand anything back to the workflow.
pub trait MapPresenter {
    fn render(&mut self, scene: &MapScene) -> io::Result<()>;
}

/// Render the current snapshot, then every change, until the workflow goes
/// away.
pub async fn present<P>(mut receiver: watch::Receiver<WorkflowState>, presenter: &mut P) -> io::Result<()>
where
    P: MapPresenter + ?Sized,
{
    loop {
        let scene = MapScene::from_state(&receiver.borrow_and_update());
        presenter.render(&scene)?;
        if receiver.changed().await.is_err() {
            return Ok(());
        }
    }
}
