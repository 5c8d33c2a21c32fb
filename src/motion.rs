//! Engine-independent motion descriptors.
//!
//! Everything here is plain data plus the CSS it renders to. The browser's
//! transition and keyframe machinery does the interpolation; `app::animate`
//! only writes the declarations produced here onto elements.

/// Transition easing curves, approximated as CSS cubic beziers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Power1InOut,
    Power2Out,
    Power3Out,
    Power4Out,
    /// Overshoots slightly before settling.
    BackOut,
    /// Like [`Ease::BackOut`] with a larger overshoot.
    BackOutStrong,
    SineInOut,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Power1InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
            Ease::Power4Out => "cubic-bezier(0.23, 1, 0.32, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Ease::BackOutStrong => "cubic-bezier(0.34, 1.8, 0.64, 1)",
            Ease::SineInOut => "cubic-bezier(0.445, 0.05, 0.55, 0.95)",
        }
    }
}

/// Formats a CSS number without float noise (`0.30000000000000004` -> `0.3`).
fn num(value: f64) -> String {
    if value.abs() < 0.0005 {
        return "0".to_string();
    }
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Offset from an element's resting layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        opacity: 1.0,
    };

    /// Fully transparent, otherwise at rest. Starting point of most entrances.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub fn x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub fn y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            num(self.x),
            num(self.y),
            num(self.scale),
            num(self.rotate)
        )
    }
}

pub type Declarations = Vec<(&'static str, String)>;

/// Drops any `transition` declaration so the element's current transition
/// stays in charge.
pub fn without_transition(declarations: Declarations) -> Declarations {
    declarations
        .into_iter()
        .filter(|(property, _)| *property != "transition")
        .collect()
}

/// A one-shot transition from `from` to the element's resting pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub duration: f64,
    pub ease: Ease,
    /// Extra delay per target when a tween is applied to several elements.
    pub stagger: f64,
}

impl Tween {
    pub fn from(from: Pose) -> Self {
        Self {
            from,
            duration: 1.0,
            ease: Ease::Power3Out,
            stagger: 0.0,
        }
    }

    pub fn duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub fn ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    pub fn stagger(self, stagger: f64) -> Self {
        Self { stagger, ..self }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.stagger * index as f64
    }

    /// When the target at `index` comes to rest, counted from the moment the
    /// tween is released with `delay`.
    pub fn finish_time(&self, delay: f64, index: usize) -> f64 {
        delay + self.delay_for(index) + self.duration
    }

    /// Time from the first target starting to the last target finishing.
    pub fn total_duration(&self, targets: usize) -> f64 {
        self.duration + self.delay_for(targets.saturating_sub(1))
    }

    pub fn transition(&self, delay: f64) -> String {
        let timing = format!("{}s {} {}s", num(self.duration), self.ease.css(), num(delay));
        format!("transform {timing}, opacity {timing}")
    }

    /// Declarations that park an element at the start of the tween.
    pub fn primed(&self) -> Declarations {
        vec![
            ("transition", "none".to_string()),
            ("transform", self.from.transform()),
            ("opacity", num(self.from.opacity)),
        ]
    }

    /// Declarations that release an element towards rest after `delay` seconds.
    pub fn settled(&self, delay: f64) -> Declarations {
        vec![
            ("transition", self.transition(delay)),
            ("transform", Pose::REST.transform()),
            ("opacity", num(Pose::REST.opacity)),
        ]
    }
}

/// Which elements a tween moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targets {
    Container,
    /// Every direct child of the container, staggered in document order.
    Children,
}

/// Fires once the top of the trigger element passes `start` (a fraction of
/// the viewport height, measured from the top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub start: f64,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self { start: 0.8 }
    }
}

impl ScrollTrigger {
    /// Intersection observer root margin that shrinks the viewport to `start`.
    pub fn root_margin(&self) -> String {
        let cut = ((1.0 - self.start.clamp(0.0, 1.0)) * 100.0).round();
        format!("0px 0px -{}% 0px", num(cut))
    }

    /// An element counts as reached when it intersects the shrunk viewport
    /// or has already been scrolled past (its bottom edge is above the top).
    pub fn reached(&self, intersecting: bool, bottom: f64) -> bool {
        intersecting || bottom < 0.0
    }
}

/// A declarative entrance: when `trigger` fires, play `tween` on `targets`.
/// Entrances play at most once per mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceBinding {
    pub trigger: ScrollTrigger,
    pub tween: Tween,
    pub targets: Targets,
}

impl EntranceBinding {
    pub fn on_scroll(tween: Tween, targets: Targets) -> Self {
        Self {
            trigger: ScrollTrigger::default(),
            tween,
            targets,
        }
    }

    /// The section heading entrance shared by every scroll-driven section.
    pub fn heading() -> Self {
        Self::on_scroll(Tween::from(Pose::hidden().y(50.0)), Targets::Container)
    }
}

/// Lifecycle of a single entrance registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntranceState {
    #[default]
    Idle,
    Armed,
    Played,
    Released,
}

impl EntranceState {
    /// Idle -> Armed. Returns whether the registration should be set up.
    pub fn arm(&mut self) -> bool {
        if *self == Self::Idle {
            *self = Self::Armed;
            true
        } else {
            false
        }
    }

    /// Armed -> Played when `reached`. Returns whether the tween should play.
    pub fn trigger(&mut self, reached: bool) -> bool {
        if reached && *self == Self::Armed {
            *self = Self::Played;
            true
        } else {
            false
        }
    }

    /// Armed | Played -> Released. Returns whether teardown should run.
    pub fn release(&mut self) -> bool {
        match self {
            Self::Armed | Self::Played => {
                *self = Self::Released;
                true
            }
            Self::Idle | Self::Released => false,
        }
    }
}

/// Symmetric hover micro-interaction: move to `to` on enter, back to rest on
/// leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub to: Pose,
    pub duration: f64,
    pub ease: Ease,
}

impl Hover {
    pub fn new(to: Pose, duration: f64) -> Self {
        Self {
            to,
            duration,
            ease: Ease::Power2Out,
        }
    }

    fn declarations(&self, pose: Pose) -> Declarations {
        vec![
            (
                "transition",
                format!("transform {}s {}", num(self.duration), self.ease.css()),
            ),
            ("transform", pose.transform()),
        ]
    }

    pub fn enter(&self) -> Declarations {
        self.declarations(self.to)
    }

    pub fn leave(&self) -> Declarations {
        self.declarations(Pose::REST)
    }
}

/// Endless back-and-forth movement towards `to`, driven by the `drift`
/// keyframes in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub to: Pose,
    pub duration: f64,
    pub ease: Ease,
}

impl Drift {
    pub fn declarations(&self) -> Declarations {
        vec![
            ("--drift-x", format!("{}px", num(self.to.x))),
            ("--drift-y", format!("{}px", num(self.to.y))),
            ("--drift-opacity", num(self.to.opacity)),
            (
                "animation",
                format!(
                    "drift {}s {} 0s infinite alternate",
                    num(self.duration),
                    self.ease.css()
                ),
            ),
        ]
    }

    /// Declarations flattened into an inline `style` attribute.
    pub fn style(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sequences tweens one after another, with optional overlap.
///
/// Each step starts `overlap` seconds before the current end of the timeline
/// (never before zero); the timeline end is the latest finish seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timeline {
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tween` applied to `targets` elements. Returns its start time.
    pub fn push(&mut self, tween: &Tween, targets: usize, overlap: f64) -> f64 {
        let start = (self.end - overlap).max(0.0);
        self.end = self.end.max(start + tween.total_duration(targets));
        start
    }

    pub fn end(&self) -> f64 {
        self.end
    }
}
