//! Sampling a computed cycle for the piston/gauge animation.
//!
//! A full cycle maps to progress in `[0, 1)`. The animation renderer only
//! draws; everything it needs at a given progress comes from [`sample_frame`].

use crate::types::{CycleResult, CycleType, StatePoint};
use std::f64::consts::TAU;
use tc_core::numeric::{lerp, normalize};

/// Wall time of one cycle at 1x speed [ms].
pub const CYCLE_PERIOD_MS: f64 = 5000.0;

pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 3.0;

/// Gauge reading used when there is no data to interpolate.
const NEUTRAL_GAUGE: f64 = 0.5;

/// Everything needed to draw one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    /// Wrapped progress in `[0, 1)`
    pub progress: f64,
    pub stage: &'static str,
    /// Piston face position as a fraction of cylinder height, measured from the head.
    pub piston_position: f64,
    /// Crank angle from top dead center [rad]
    pub crank_angle: f64,
    /// Interpolated pressure [MPa], `None` without diagram data
    pub pressure: Option<f64>,
    /// Interpolated temperature [K], `None` without diagram data
    pub temperature: Option<f64>,
    /// Pressure gauge fill in `[0, 1]`
    pub normalized_pressure: f64,
    /// Temperature gauge fill in `[0, 1]`
    pub normalized_temperature: f64,
}

/// Map any progress value into `[0, 1)`.
pub fn wrap_progress(progress: f64) -> f64 {
    let wrapped = progress.rem_euclid(1.0);
    if wrapped.is_finite() { wrapped } else { 0.0 }
}

/// Progress at which the power stroke ends and exhaust begins.
fn power_stroke_end(cycle: CycleType) -> f64 {
    match cycle {
        CycleType::Diesel => 0.85,
        CycleType::Otto | CycleType::Rankine => 0.75,
    }
}

/// Human-readable name of the process under way at `progress`.
pub fn stage_label(cycle: CycleType, progress: f64) -> &'static str {
    let p = wrap_progress(progress);
    match cycle {
        CycleType::Otto | CycleType::Diesel => {
            if p < 0.25 {
                "Compression Stroke"
            } else if p < 0.5 {
                if cycle == CycleType::Otto {
                    "Combustion (Constant Volume)"
                } else {
                    "Combustion (Constant Pressure)"
                }
            } else if p < power_stroke_end(cycle) {
                "Power Stroke"
            } else {
                "Exhaust/Intake Stroke"
            }
        }
        CycleType::Rankine => {
            if p < 0.25 {
                "Pump (Compression)"
            } else if p < 0.5 {
                "Boiler (Heat Addition)"
            } else if p < 0.75 {
                "Turbine (Expansion)"
            } else {
                "Condenser (Heat Rejection)"
            }
        }
    }
}

/// v1 / v2 read back from the P-V data.
pub fn diagram_compression_ratio(result: &CycleResult) -> Option<f64> {
    let v1 = result.pv_data.first()?.x;
    let v2 = result.pv_data.get(1)?.x;
    let r = v1 / v2;
    (r.is_finite() && r >= 1.0).then_some(r)
}

/// Piston position at `progress`, see [`AnimationFrame::piston_position`].
pub fn piston_position(cycle: CycleType, result: &CycleResult, progress: f64) -> f64 {
    let p = wrap_progress(progress);

    if !cycle.is_reciprocating() {
        // Schematic only: the Rankine cycle runs through a turbine.
        return if p < 0.25 {
            0.8 - p * 0.6
        } else if p < 0.5 {
            0.65
        } else if p < 0.75 {
            0.65 + (p - 0.5) / 0.25 * 0.25
        } else {
            0.9 - (p - 0.75) / 0.25 * 0.1
        };
    }

    let top = 1.0 / diagram_compression_ratio(result).unwrap_or(1.0);
    let stroke = 1.0 - top;
    let end = power_stroke_end(cycle);

    if p < 0.25 {
        1.0 - (p / 0.25) * stroke
    } else if p < 0.5 {
        top
    } else if p < end {
        top + (p - 0.5) / (end - 0.5) * stroke
    } else {
        1.0 - (p - end) / (1.0 - end) * stroke
    }
}

/// Interpolated gauge value along the four processes, plus its normalized fill.
fn gauge(points: &[StatePoint], progress: f64) -> (Option<f64>, f64) {
    if points.len() < 4 {
        return (None, NEUTRAL_GAUGE);
    }

    let scaled = wrap_progress(progress) * 4.0;
    let segment = (scaled.floor() as usize).min(3);
    let t = scaled - segment as f64;
    let value = lerp(points[segment].y, points[(segment + 1) % 4].y, t);

    let (min, max) = points
        .iter()
        .map(|pt| pt.y)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    (
        Some(value),
        normalize(value, min, max).unwrap_or(NEUTRAL_GAUGE),
    )
}

/// Sample the animation state of a computed cycle.
pub fn sample_frame(cycle: CycleType, result: &CycleResult, progress: f64) -> AnimationFrame {
    let p = wrap_progress(progress);
    let (pressure, normalized_pressure) = gauge(&result.pv_data, p);
    let (temperature, normalized_temperature) = gauge(&result.ts_data, p);

    AnimationFrame {
        progress: p,
        stage: stage_label(cycle, p),
        piston_position: piston_position(cycle, result, p),
        crank_angle: p * TAU,
        pressure,
        temperature,
        normalized_pressure,
        normalized_temperature,
    }
}

/// Playback clock for the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    progress: f64,
    speed: f64,
    playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            speed: 1.0,
            playing: false,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Stop and rewind to the start of the cycle.
    pub fn reset(&mut self) {
        self.playing = false;
        self.progress = 0.0;
    }

    /// Speed multiplier, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_finite() {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
    }

    /// Jump to a progress value (wrapped).
    pub fn seek(&mut self, progress: f64) {
        self.progress = wrap_progress(progress);
    }

    /// Advance by elapsed wall time when playing; returns the new progress.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        if self.playing && dt_ms.is_finite() && dt_ms > 0.0 {
            self.progress = wrap_progress(self.progress + dt_ms / CYCLE_PERIOD_MS * self.speed);
        }
        self.progress
    }
}
