use core::f64::consts::PI;

/// A scroll-offset interpolation, sampled by wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }

    /// Restarts from the current sample towards `new_to`, keeping the easing.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Half a cosine wave; the classic "swing" curve.
    Swing,
    /// Fast start, long exponential tail.
    #[default]
    EaseOutExpo,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Looks up an easing by its conventional name (`"linear"`, `"swing"`, `"easeOutExpo"`,
    /// `"smoothStep"`, `"easeInOutCubic"`), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: [(&str, Easing); 5] = [
            ("linear", Easing::Linear),
            ("swing", Easing::Swing),
            ("easeOutExpo", Easing::EaseOutExpo),
            ("smoothStep", Easing::SmoothStep),
            ("easeInOutCubic", Easing::EaseInOutCubic),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, e)| e)
    }

    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Swing => 0.5 - (t * PI).cos() / 2.0,
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Named animation speeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Speed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl Speed {
    pub const FAST_MS: u64 = 200;
    pub const NORMAL_MS: u64 = 400;
    pub const SLOW_MS: u64 = 600;

    /// `"fast"`, `"slow"`, or `"normal"`/`"_default"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fast" => Some(Self::Fast),
            "slow" => Some(Self::Slow),
            "normal" | "_default" => Some(Self::Normal),
            _ => None,
        }
    }

    pub fn duration_ms(self) -> u64 {
        match self {
            Self::Fast => Self::FAST_MS,
            Self::Normal => Self::NORMAL_MS,
            Self::Slow => Self::SLOW_MS,
        }
    }
}
