//! Resource models and their codecs.

mod animation_curve;

pub use animation_curve::{AnimationCurve, Channel, ChannelFunction, GraphType, Point};
