use tendril::{ArmConfig, ChannelMap, DriveSignals, NoOpStepObserver, Simulation, Vec2};
use wasm_bindgen::prelude::*;

// ---- Arm Demo ----

/// Browser front end for one arm. JS forwards key state per channel,
/// calls `update` once per animation frame, then draws from the flat buffers.
#[wasm_bindgen]
pub struct ArmDemo {
    sim: Simulation<f32>,
    signals: DriveSignals<f32>,
}

#[wasm_bindgen]
impl ArmDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize, paired: bool) -> Result<ArmDemo, JsValue> {
        let mut config = ArmConfig::new().with_segments(segments);
        if paired {
            config = config.with_channels(ChannelMap::paired(segments));
        }
        let sim = Simulation::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let signals = sim.idle_signals();
        Ok(ArmDemo { sim, signals })
    }

    pub fn channel_count(&self) -> usize {
        self.sim.channel_count()
    }

    /// Key state for one channel: `upper` curls the top edge, `lower` the bottom.
    pub fn set_keys(&mut self, channel: usize, upper: bool, lower: bool) -> Result<(), JsValue> {
        self.signals
            .set_keys(channel, upper, lower)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn update(&mut self) {
        self.sim.step(&self.signals, &mut NoOpStepObserver);
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.signals.release_all();
        self.sim.reset().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns flat [x1, y1, x2, y2, ...], one line per spring
    pub fn spring_lines(&self) -> Vec<f32> {
        let snap = self.sim.snapshot();
        let mut out = Vec::with_capacity(snap.springs.len() * 4);
        for s in &snap.springs {
            out.extend_from_slice(&[s.from.x, s.from.y, s.to.x, s.to.y]);
        }
        out
    }

    /// Returns flat [x, y, radius, ...] for mobile points then anchors
    pub fn circles(&self) -> Vec<f32> {
        let snap = self.sim.snapshot();
        let mut out = Vec::with_capacity((snap.points.len() + snap.anchors.len()) * 3);
        for p in snap.points.iter().chain(snap.anchors.iter()) {
            out.extend_from_slice(&[p.pos.x, p.pos.y, p.radius]);
        }
        out
    }

    /// Returns [upper_x, upper_y, lower_x, lower_y] of the arm tip
    pub fn tip(&self) -> Vec<f32> {
        let (upper, lower) = self.sim.tip();
        vec![upper.x, upper.y, lower.x, lower.y]
    }
}

// ---- Target Game ----

/// Reach-the-target wrapper: scores whenever either tip point comes within
/// `radius` of the current target. JS picks new target positions.
#[wasm_bindgen]
pub struct TargetGame {
    arm: ArmDemo,
    target: Vec2<f32>,
    radius: f32,
    score: u32,
    hit: bool,
}

#[wasm_bindgen]
impl TargetGame {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize, radius: f32) -> Result<TargetGame, JsValue> {
        Ok(TargetGame {
            arm: ArmDemo::new(segments, true)?,
            target: Vec2::new(0.0, 0.0),
            radius,
            score: 0,
            hit: false,
        })
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
        self.hit = false;
    }

    pub fn set_keys(&mut self, channel: usize, upper: bool, lower: bool) -> Result<(), JsValue> {
        self.arm.set_keys(channel, upper, lower)
    }

    /// Step the arm and return true on the frame the target is first reached.
    pub fn update(&mut self) -> bool {
        self.arm.update();
        let (upper, lower) = self.arm.sim.tip();
        let reached = upper.distance(self.target) < self.radius
            || lower.distance(self.target) < self.radius;
        if reached && !self.hit {
            self.hit = true;
            self.score += 1;
            return true;
        }
        false
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn spring_lines(&self) -> Vec<f32> {
        self.arm.spring_lines()
    }

    pub fn circles(&self) -> Vec<f32> {
        self.arm.circles()
    }
}
