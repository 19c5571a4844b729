// crates/furom-core/src/container/extract.rs

use crate::bitmap::codec::decode_image;
use crate::bitmap::grid::PixelGrid;
use crate::bitmap::orient::to_raster_orientation;
use crate::container::record::{classify, Record, RecordKind};
use crate::container::table::OffsetTable;
use crate::error::Result;

pub const AUDIO_EXT: &str = "a18";
pub const IMAGE_EXT: &str = "bmp";

/// The record kinds that produce an output file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Audio,
    Image,
}

impl ArtifactKind {
    /// `None` for records that are dropped.
    pub fn of(kind: RecordKind) -> Option<Self> {
        match kind {
            RecordKind::Audio => Some(ArtifactKind::Audio),
            RecordKind::Image => Some(ArtifactKind::Image),
            RecordKind::Unknown => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Audio => AUDIO_EXT,
            ArtifactKind::Image => IMAGE_EXT,
        }
    }
}

impl From<ArtifactKind> for RecordKind {
    fn from(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Audio => RecordKind::Audio,
            ArtifactKind::Image => RecordKind::Image,
        }
    }
}

/// A classified record with its per-kind sequence number (1-based).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub seq: u32,
    pub record: Record,
}

impl Artifact {
    /// `audio0001`, `img_0001`, ...
    pub fn file_stem(&self) -> String {
        match self.kind {
            ArtifactKind::Audio => format!("audio{:04}", self.seq),
            ArtifactKind::Image => format!("img_{:04}", self.seq),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), self.kind.extension())
    }
}

/// Per-kind counters threaded through the classification fold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub audio: u32,
    pub image: u32,
}

impl Counters {
    /// Advance the counter for `kind` and return the new state plus the
    /// number just assigned.
    pub fn bump(self, kind: ArtifactKind) -> (Self, u32) {
        match kind {
            ArtifactKind::Audio => {
                let audio = self.audio + 1;
                (Self { audio, ..self }, audio)
            }
            ArtifactKind::Image => {
                let image = self.image + 1;
                (Self { image, ..self }, image)
            }
        }
    }
}

/// What happens to one table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Extract(Artifact),
    Skip(Record),
}

impl Decision {
    pub fn record(&self) -> &Record {
        match self {
            Decision::Extract(a) => &a.record,
            Decision::Skip(r) => r,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Decision::Extract(a) => a.kind.into(),
            Decision::Skip(_) => RecordKind::Unknown,
        }
    }
}

/// Classification of every table entry, in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub decisions: Vec<Decision>,
    pub counters: Counters,
}

impl Plan {
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> + '_ {
        self.decisions.iter().filter_map(|d| match d {
            Decision::Extract(a) => Some(a),
            Decision::Skip(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Record> + '_ {
        self.decisions.iter().filter_map(|d| match d {
            Decision::Skip(r) => Some(r),
            Decision::Extract(_) => None,
        })
    }
}

/// Classify all records and assign sequence numbers.
///
/// Numbering depends only on table order, so the plan can be computed up front
/// and the (independent) per-record work done afterwards in any order.
pub fn plan(table: &OffsetTable, blob: &[u8]) -> Plan {
    table
        .records()
        .into_iter()
        .fold(Plan::default(), |mut plan, record| {
            let decision = match ArtifactKind::of(classify(&record, blob)) {
                Some(kind) => {
                    let (counters, seq) = plan.counters.bump(kind);
                    plan.counters = counters;
                    Decision::Extract(Artifact { kind, seq, record })
                }
                None => Decision::Skip(record),
            };
            plan.decisions.push(decision);
            plan
        })
}

/// Receives extracted artifacts. Implementations decide where they go.
pub trait ArtifactSink {
    /// Verbatim audio record bytes.
    fn audio(&mut self, artifact: &Artifact, bytes: &[u8]) -> Result<()>;

    /// Decoded image, already in viewable (raster) orientation.
    fn image(&mut self, artifact: &Artifact, view: &PixelGrid) -> Result<()>;

    /// A record that was neither audio nor image.
    fn skipped(&mut self, _record: &Record) {}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub audio: u32,
    pub images: u32,
    pub skipped: usize,
}

/// Walk the table and hand every classified record to `sink`, in table order.
///
/// A sink error aborts the walk; records already delivered stay delivered.
pub fn extract<S: ArtifactSink>(
    table: &OffsetTable,
    blob: &[u8],
    sink: &mut S,
) -> Result<ExtractSummary> {
    let plan = plan(table, blob);
    let mut skipped = 0;

    for decision in &plan.decisions {
        match decision {
            Decision::Extract(artifact) => {
                let bytes = artifact.record.bytes(blob);
                match artifact.kind {
                    ArtifactKind::Audio => sink.audio(artifact, bytes)?,
                    ArtifactKind::Image => {
                        let grid = decode_image(bytes)?;
                        sink.image(artifact, &to_raster_orientation(&grid))?;
                    }
                }
            }
            Decision::Skip(record) => {
                skipped += 1;
                sink.skipped(record);
            }
        }
    }

    Ok(ExtractSummary {
        audio: plan.counters.audio,
        images: plan.counters.image,
        skipped,
    })
}
