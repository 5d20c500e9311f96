//! Per-frame timing sample type
//!
//! The unit of raw input: six float channels extracted once per rendered
//! frame by an external collector (platform frame-timing API, recorded log,
//! or synthetic workload).

/// Identifies one timing channel of a [`FrameSample`].
///
/// Aggregation runs one independent fold per channel; this enum lets those
/// folds address channels generically instead of reusing the sample struct
/// itself as accumulator scratch space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleField {
    FramesPerSecond,
    FullFrameTime,
    MainThreadCpuFrameTime,
    MainThreadCpuPresentWaitTime,
    RenderThreadCpuFrameTime,
    GpuFrameTime,
}

impl SampleField {
    /// All six channels in canonical report order.
    pub const ALL: [SampleField; 6] = [
        SampleField::FramesPerSecond,
        SampleField::FullFrameTime,
        SampleField::MainThreadCpuFrameTime,
        SampleField::MainThreadCpuPresentWaitTime,
        SampleField::RenderThreadCpuFrameTime,
        SampleField::GpuFrameTime,
    ];

    /// Stable snake_case channel name, used in frame logs, CSV headers and
    /// summary tables.
    pub fn label(self) -> &'static str {
        match self {
            SampleField::FramesPerSecond => "frames_per_second",
            SampleField::FullFrameTime => "full_frame_time",
            SampleField::MainThreadCpuFrameTime => "main_thread_cpu_frame_time",
            SampleField::MainThreadCpuPresentWaitTime => "main_thread_cpu_present_wait_time",
            SampleField::RenderThreadCpuFrameTime => "render_thread_cpu_frame_time",
            SampleField::GpuFrameTime => "gpu_frame_time",
        }
    }
}

/// One frame's worth of timing data.
///
/// All channels are milliseconds except `frames_per_second`. A channel value
/// of exactly `0.0` means "no data for this channel this frame" (a render
/// thread may not exist in the current rendering mode, a GPU query may be
/// unsupported), never a measured zero duration. Every aggregation and
/// classification rule downstream honors that convention; collectors must
/// supply `0.0` for channels they cannot measure and non-negative values
/// otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameSample {
    /// Derived rate: `1000 / full_frame_time` when the frame time is known.
    pub frames_per_second: f32,
    /// Wall-clock duration of the whole frame.
    pub full_frame_time: f32,
    /// Main-thread CPU work for the frame.
    pub main_thread_cpu_frame_time: f32,
    /// Main-thread time spent waiting to present (vsync or frame cap).
    pub main_thread_cpu_present_wait_time: f32,
    /// Render-thread CPU work for the frame.
    pub render_thread_cpu_frame_time: f32,
    /// GPU execution time for the frame.
    pub gpu_frame_time: f32,
}

impl FrameSample {
    /// Build a sample from the five measured channels, deriving
    /// `frames_per_second` from the full frame time.
    ///
    /// An unmeasured (`0.0`) full frame time yields a `0.0` rate rather than
    /// a division by zero.
    pub fn from_frame_times(
        full_frame_time: f32,
        main_thread_cpu_frame_time: f32,
        main_thread_cpu_present_wait_time: f32,
        render_thread_cpu_frame_time: f32,
        gpu_frame_time: f32,
    ) -> Self {
        let frames_per_second = if full_frame_time > 0.0 {
            1000.0 / full_frame_time
        } else {
            0.0
        };

        FrameSample {
            frames_per_second,
            full_frame_time,
            main_thread_cpu_frame_time,
            main_thread_cpu_present_wait_time,
            render_thread_cpu_frame_time,
            gpu_frame_time,
        }
    }

    /// Read one channel.
    pub fn field(&self, field: SampleField) -> f32 {
        match field {
            SampleField::FramesPerSecond => self.frames_per_second,
            SampleField::FullFrameTime => self.full_frame_time,
            SampleField::MainThreadCpuFrameTime => self.main_thread_cpu_frame_time,
            SampleField::MainThreadCpuPresentWaitTime => self.main_thread_cpu_present_wait_time,
            SampleField::RenderThreadCpuFrameTime => self.render_thread_cpu_frame_time,
            SampleField::GpuFrameTime => self.gpu_frame_time,
        }
    }

    /// Write one channel.
    pub fn set_field(&mut self, field: SampleField, value: f32) {
        match field {
            SampleField::FramesPerSecond => self.frames_per_second = value,
            SampleField::FullFrameTime => self.full_frame_time = value,
            SampleField::MainThreadCpuFrameTime => self.main_thread_cpu_frame_time = value,
            SampleField::MainThreadCpuPresentWaitTime => {
                self.main_thread_cpu_present_wait_time = value
            }
            SampleField::RenderThreadCpuFrameTime => self.render_thread_cpu_frame_time = value,
            SampleField::GpuFrameTime => self.gpu_frame_time = value,
        }
    }
}
