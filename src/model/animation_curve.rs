//! Animation curve resource.
//!
//! A curve is a named set of channels, each holding an ordered run of
//! sample points. Runtimes from 2.3.1 on store four Bezier handle floats
//! per point; earlier runtimes store a single zero placeholder instead,
//! and nothing in the record itself says which layout is in effect. When
//! the session version is still below 2.3.1, the count-only scan inspects
//! the first point's bytes to decide (see [`probe_point_layout`]).

use tracing::debug;

use crate::core::{GmRecord, GmVersion};
use crate::io::{list, Reader, StringRef, Writer};
use crate::util::Result;

/// Point record width below 2.3.1: x, value, zero placeholder.
const POINT_SIZE: u64 = 12;

/// Point record width from 2.3.1 on: x, value, four Bezier handles.
const POINT_SIZE_BEZIER: u64 = 24;

/// Record width of one point for the active version.
fn point_size(version: &GmVersion) -> u64 {
    if version.is_at_least(2, 3, 1) {
        POINT_SIZE_BEZIER
    } else {
        POINT_SIZE
    }
}

/// Graph display type of a curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphType {
    #[default]
    Unknown0,
    Unknown1,
    /// Value outside the known set, preserved verbatim for round-trips.
    Other(u32),
}

impl GraphType {
    /// Parse from the raw u32 value.
    pub fn from_u32(raw: u32) -> Self {
        match raw {
            0 => GraphType::Unknown0,
            1 => GraphType::Unknown1,
            other => GraphType::Other(other),
        }
    }

    /// Convert to the raw u32 value.
    pub fn to_u32(self) -> u32 {
        match self {
            GraphType::Unknown0 => 0,
            GraphType::Unknown1 => 1,
            GraphType::Other(raw) => raw,
        }
    }
}

/// Interpolation function of a channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelFunction {
    #[default]
    Linear,
    Smooth,
    /// Value outside the known set, preserved verbatim for round-trips.
    Other(u32),
}

impl ChannelFunction {
    /// Parse from the raw u32 value.
    pub fn from_u32(raw: u32) -> Self {
        match raw {
            0 => ChannelFunction::Linear,
            1 => ChannelFunction::Smooth,
            other => ChannelFunction::Other(other),
        }
    }

    /// Convert to the raw u32 value.
    pub fn to_u32(self) -> u32 {
        match self {
            ChannelFunction::Linear => 0,
            ChannelFunction::Smooth => 1,
            ChannelFunction::Other(raw) => raw,
        }
    }
}

/// One sample point on a channel.
///
/// The Bezier handles exist on disk only from 2.3.1 on; when reading
/// earlier layouts they stay at their zero default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub value: f32,
    pub bezier_x0: f32,
    pub bezier_y0: f32,
    pub bezier_x1: f32,
    pub bezier_y1: f32,
}

impl GmRecord for Point {
    fn write(&self, w: &mut Writer) -> Result<()> {
        w.write_f32(self.x)?;
        w.write_f32(self.value)?;

        if w.version().is_at_least(2, 3, 1) {
            w.write_f32(self.bezier_x0)?;
            w.write_f32(self.bezier_y0)?;
            w.write_f32(self.bezier_x1)?;
            w.write_f32(self.bezier_y1)?;
        } else {
            w.write_u32(0)?;
        }
        Ok(())
    }

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        let mut point = Point {
            x: r.read_f32()?,
            value: r.read_f32()?,
            ..Point::default()
        };

        if r.version().is_at_least(2, 3, 1) {
            point.bezier_x0 = r.read_f32()?;
            point.bezier_y0 = r.read_f32()?;
            point.bezier_x1 = r.read_f32()?;
            point.bezier_y1 = r.read_f32()?;
        } else {
            r.skip(4)?;
        }
        Ok(point)
    }

    fn scan(r: &mut Reader<'_>) -> Result<u32> {
        r.skip(point_size(r.version()))?;
        Ok(1)
    }
}

/// A named channel of an animation curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Channel {
    pub name: StringRef,
    pub function: ChannelFunction,
    pub iterations: u32,
    pub points: Vec<Point>,
}

impl GmRecord for Channel {
    fn write(&self, w: &mut Writer) -> Result<()> {
        w.write_string_ref(self.name)?;
        w.write_u32(self.function.to_u32())?;
        w.write_u32(self.iterations)?;
        list::write_list(w, &self.points)
    }

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            name: r.read_string_ref()?,
            function: ChannelFunction::from_u32(r.read_u32()?),
            iterations: r.read_u32()?,
            points: list::read_list(r)?,
        })
    }

    fn scan(r: &mut Reader<'_>) -> Result<u32> {
        // name + function + iterations
        r.skip(12)?;

        if !r.version().is_at_least(2, 3, 1) {
            probe_point_layout(r)?;
        }

        let count = r.read_u32()?;
        r.skip(point_size(r.version()) * count as u64)?;
        Ok(1 + count)
    }
}

/// Decide between the two point layouts by inspecting the first point.
///
/// Runtimes before 2.3.1 wrote a literal zero as the third word of every
/// point; from 2.3.1 on that offset holds `bezier_x0`. A non-zero word
/// therefore rules out the old layout. A zero word is ambiguous, so the
/// following word is consulted as well: tools that zero a point's X handle
/// zero its Y handle too, so a second zero is read as the new layout,
/// while anything else leaves the version untouched.
///
/// Best effort only: curves embedded in sequence data by some older
/// authoring builds defeat the check, and that misread is accepted. The
/// cursor is restored on every exit path; only the session version may
/// change.
fn probe_point_layout(r: &mut Reader<'_>) -> Result<()> {
    r.look_ahead(|r| {
        let num_points = r.read_u32()?;
        if num_points == 0 {
            return Ok(());
        }

        // x and value are identical in both layouts, so they prove nothing.
        r.skip(8)?;
        if r.read_u32()? != 0 {
            debug!("non-zero word in bezier slot, raising version to 2.3.1");
            r.version_mut().set_minimum(2, 3, 1);
        } else if r.read_u32()? == 0 {
            debug!("zeroed handle pair, raising version to 2.3.1");
            r.version_mut().set_minimum(2, 3, 1);
        }
        Ok(())
    })
}

/// An animation curve resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationCurve {
    pub name: StringRef,
    pub graph_type: GraphType,
    pub channels: Vec<Channel>,
}

impl AnimationCurve {
    /// Serialize, optionally omitting the name ref. Curves embedded in
    /// other resources keep their name in the parent record.
    pub fn write_opts(&self, w: &mut Writer, include_name: bool) -> Result<()> {
        if include_name {
            w.write_string_ref(self.name)?;
        }
        w.write_u32(self.graph_type.to_u32())?;
        list::write_list(w, &self.channels)
    }

    /// Deserialize, optionally without a leading name ref.
    pub fn read_opts(r: &mut Reader<'_>, include_name: bool) -> Result<Self> {
        let name = if include_name {
            r.read_string_ref()?
        } else {
            StringRef::default()
        };
        Ok(Self {
            name,
            graph_type: GraphType::from_u32(r.read_u32()?),
            channels: list::read_list(r)?,
        })
    }

    /// Count-only pass over one curve; see [`GmRecord::scan`].
    pub fn scan_opts(r: &mut Reader<'_>, include_name: bool) -> Result<u32> {
        // graph type, plus the name ref when present
        r.skip(if include_name { 8 } else { 4 })?;
        Ok(1 + list::scan_list::<Channel>(r)?)
    }
}

impl GmRecord for AnimationCurve {
    fn write(&self, w: &mut Writer) -> Result<()> {
        self.write_opts(w, true)
    }

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Self::read_opts(r, true)
    }

    fn scan(r: &mut Reader<'_>) -> Result<u32> {
        Self::scan_opts(r, true)
    }
}
