/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 12 floats]
/// [Instances: max_instances × 8 floats]
/// [Labels: max_labels × 4 floats]
/// [Events: max_events × 4 floats]
/// [Lights: max_lights × 8 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LABELS: usize = 4;
pub const HEADER_LABEL_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_MAX_LIGHTS: usize = 8;
pub const HEADER_LIGHT_COUNT: usize = 9;
pub const HEADER_VIEWPORT_WIDTH: usize = 10;
pub const HEADER_VIEWPORT_HEIGHT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section (fixed wire format).
pub const CAMERA_FLOATS: usize = 12;

/// Floats per render instance: id, x, y, z, rot_y, scale, radius, visible.
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per label: id, x, y, visible.
pub const LABEL_FLOATS: usize = 4;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats per light: kind, x, y, z, r, g, b, intensity.
pub const LIGHT_FLOATS: usize = 8;

/// Default maximum number of lights.
pub const DEFAULT_MAX_LIGHTS: usize = 8;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_labels: usize,
    pub max_events: usize,
    pub max_lights: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where label data begins.
    pub label_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_labels: usize, max_events: usize, max_lights: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let label_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let event_data_offset = label_data_offset + max_labels * LABEL_FLOATS;
        let light_data_offset = event_data_offset + max_events * EVENT_FLOATS;

        let buffer_total_floats = light_data_offset + max_lights * LIGHT_FLOATS;

        Self {
            max_instances,
            max_labels,
            max_events,
            max_lights,
            camera_offset,
            instance_data_offset,
            label_data_offset,
            event_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_labels,
            config.max_events,
            config.max_lights,
        )
    }

    /// Header snapshot for one frame. Counts are clamped to capacity.
    pub fn header(
        &self,
        frame: u32,
        counts: FrameCounts,
        viewport: (f32, f32),
    ) -> [f32; HEADER_FLOATS] {
        let mut h = [0.0; HEADER_FLOATS];
        h[HEADER_FRAME_COUNTER] = frame as f32;
        h[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = counts.instances.min(self.max_instances) as f32;
        h[HEADER_MAX_LABELS] = self.max_labels as f32;
        h[HEADER_LABEL_COUNT] = counts.labels.min(self.max_labels) as f32;
        h[HEADER_MAX_EVENTS] = self.max_events as f32;
        h[HEADER_EVENT_COUNT] = counts.events.min(self.max_events) as f32;
        h[HEADER_MAX_LIGHTS] = self.max_lights as f32;
        h[HEADER_LIGHT_COUNT] = counts.lights.min(self.max_lights) as f32;
        h[HEADER_VIEWPORT_WIDTH] = viewport.0;
        h[HEADER_VIEWPORT_HEIGHT] = viewport.1;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h
    }
}

/// Per-frame section fill counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounts {
    pub instances: usize,
    pub labels: usize,
    pub events: usize,
    pub lights: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_instances, 512);
        assert_eq!(layout.max_labels, 64);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);

        let expected = HEADER_FLOATS + CAMERA_FLOATS + 512 * 8 + 64 * 4 + 32 * 4 + 8 * 8;
        assert_eq!(layout.buffer_total_floats, expected);
        assert_eq!(layout.buffer_total_bytes, expected * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20, 10, 4);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.instance_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.label_data_offset, layout.instance_data_offset + 100 * INSTANCE_FLOATS);
        assert_eq!(layout.event_data_offset, layout.label_data_offset + 20 * LABEL_FLOATS);
        assert_eq!(layout.light_data_offset, layout.event_data_offset + 10 * EVENT_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.light_data_offset + 4 * LIGHT_FLOATS);
    }

    #[test]
    fn header_clamps_counts_to_capacity() {
        let layout = ProtocolLayout::new(4, 2, 2, 1);
        let counts = FrameCounts { instances: 10, labels: 1, events: 5, lights: 1 };
        let h = layout.header(7, counts, (800.0, 600.0));

        assert_eq!(h[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(h[HEADER_INSTANCE_COUNT], 4.0);
        assert_eq!(h[HEADER_LABEL_COUNT], 1.0);
        assert_eq!(h[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(h[HEADER_LIGHT_COUNT], 1.0);
        assert_eq!(h[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(h[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
    }
}
