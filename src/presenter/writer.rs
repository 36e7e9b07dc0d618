use std::io::{self, Write};

use crate::workflow::Severity;

use super::scene::MapScene;
use super::MapPresenter;

/// Human-readable frames, one block per render.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapPresenter for TextPresenter<W> {
    fn render(&mut self, scene: &MapScene) -> io::Result<()> {
        if scene.loading {
            writeln!(self.out, "Loading route...")?;
        }
        for marker in &scene.markers {
            writeln!(
                self.out,
                "{:<12} {} ({})",
                marker.title,
                marker.coordinate,
                marker.color.name()
            )?;
        }
        if let Some(line) = &scene.polyline {
            writeln!(
                self.out,
                "Route        {} points, {} width {}",
                line.points.len(),
                line.color.name(),
                line.width
            )?;
        }
        let region = &scene.region;
        writeln!(
            self.out,
            "Region       lat {:.4}, lon {:.4}, span {:.4} x {:.4}",
            region.latitude, region.longitude, region.latitude_delta, region.longitude_delta
        )?;
        if let Some(notice) = &scene.notice {
            writeln!(self.out, "Notice       {}", notice.message)?;
            if notice.severity == Severity::Error {
                writeln!(self.out, "             {}", notice.details)?;
            }
            tracing::debug!(details = %notice.details, "Notice shown");
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// One JSON document per line, per render.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapPresenter for JsonPresenter<W> {
    fn render(&mut self, scene: &MapScene) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, scene)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
