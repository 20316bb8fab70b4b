/*
 * Timeline Module
 *
 * Page effects that run beside the skill graph: the intro sequence, scroll
 * triggered reveals, body background shifts and pointer parallax. None of them
 * touch the simulation. They are plain descriptors handed to whatever tween and
 * scroll-observer engine the host provides through `AnimationEngine`.
 *
 * Easing curves live here too since both the descriptors and the host's
 * parallax motion need them.
 */

use std::fmt;
use std::str::FromStr;

use nannou::prelude::Vec2;
use thiserror::Error;

use crate::store::SurfaceSize;
use crate::surface::Color;

// Maximum parallax travel on each axis, in surface units
pub const PARALLAX_RANGE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    Power1Out,
    Power2Out,
    Power3Out,
    Power4Out,
    // Overshoot amount, 1.7 on the hero button
    BackOut(f32),
}

impl Easing {
    // Map linear progress in [0, 1] to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let out_pow = |n: i32| 1.0 - (1.0 - t).powi(n);
        match *self {
            Easing::Linear => t,
            Easing::Power1Out => out_pow(2),
            Easing::Power2Out => out_pow(3),
            Easing::Power3Out => out_pow(4),
            Easing::Power4Out => out_pow(5),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    BackgroundColor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TweenValue {
    Number(f32),
    Color(Color),
    // Resolved by the engine, e.g. a CSS custom property
    Token(String),
}

/// One tween. An empty `from` animates from the element's current state,
/// an empty `to` animates back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: String,
    pub from: Vec<(Property, TweenValue)>,
    pub to: Vec<(Property, TweenValue)>,
    pub duration: f32,
    pub delay: f32,
    // Extra delay per matched element, by index
    pub stagger: f32,
    pub easing: Easing,
    // Offset from the end of the previous tween in a timeline
    pub offset: f32,
    pub clear_after: bool,
}

impl Tween {
    pub fn new(target: impl Into<String>, duration: f32) -> Self {
        Self {
            target: target.into(),
            from: Vec::new(),
            to: Vec::new(),
            duration,
            delay: 0.0,
            stagger: 0.0,
            easing: Easing::Linear,
            offset: 0.0,
            clear_after: false,
        }
    }

    pub fn from(mut self, property: Property, value: TweenValue) -> Self {
        self.from.push((property, value));
        self
    }

    pub fn to(mut self, property: Property, value: TweenValue) -> Self {
        self.to.push((property, value));
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn clear_after(mut self) -> Self {
        self.clear_after = true;
        self
    }

    // Start time of the `index`-th matched element, relative to the tween
    pub fn start_for(&self, index: usize) -> f32 {
        self.delay + self.stagger * index as f32
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid scroll position `{0}`")]
pub struct ScrollPositionError(String);

/// Where a trigger fires: the point `element` (fraction of the element's
/// height from its top) meets the point `viewport` (fraction of the viewport
/// height from its top). Parsed from strings like `"top center"` or
/// `"top 80%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub element: f32,
    pub viewport: f32,
}

impl ScrollPosition {
    // Scroll offset at which this position is reached
    pub fn scroll_offset(&self, element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
        element_top + self.element * element_height - self.viewport * viewport_height
    }
}

fn parse_anchor(token: &str) -> Option<f32> {
    match token {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => {
            let percent = token.strip_suffix('%')?.parse::<f32>().ok()?;
            Some(percent / 100.0)
        }
    }
}

impl FromStr for ScrollPosition {
    type Err = ScrollPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ScrollPositionError(s.to_string()));
        };
        match (parse_anchor(element), parse_anchor(viewport)) {
            (Some(element), Some(viewport)) => Ok(Self { element, viewport }),
            _ => Err(ScrollPositionError(s.to_string())),
        }
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.element * 100.0, self.viewport * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    pub trigger: String,
    pub start: ScrollPosition,
    pub end: Option<ScrollPosition>,
    pub on_enter: Option<Tween>,
    pub on_leave_back: Option<Tween>,
}

/// The capability surface of an external tween/scroll engine.
pub trait AnimationEngine {
    fn play(&mut self, tween: &Tween);
    fn observe(&mut self, trigger: &ScrollTrigger);
}

/// Everything the page animates besides the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEffects {
    pub intro: Vec<Tween>,
    pub triggers: Vec<ScrollTrigger>,
}

impl PageEffects {
    pub fn portfolio() -> Self {
        let mut triggers = background_shifts();
        triggers.extend(reveal_triggers());
        Self {
            intro: hero_timeline(),
            triggers,
        }
    }

    // Hand every descriptor to the engine
    pub fn install(&self, engine: &mut dyn AnimationEngine) {
        for tween in &self.intro {
            engine.play(tween);
        }
        for trigger in &self.triggers {
            engine.observe(trigger);
        }
        log::debug!(
            "installed {} intro tweens and {} scroll triggers",
            self.intro.len(),
            self.triggers.len()
        );
    }
}

fn num(value: f32) -> TweenValue {
    TweenValue::Number(value)
}

fn position(s: &str) -> ScrollPosition {
    // Only called with the literals below
    s.parse().unwrap_or(ScrollPosition { element: 0.0, viewport: 0.5 })
}

// Heading, tagline and call-to-action, chained with overlaps
pub fn hero_timeline() -> Vec<Tween> {
    vec![
        Tween::new(".hero h1", 1.0)
            .from(Property::Opacity, num(0.0))
            .from(Property::TranslateY, num(50.0))
            .ease(Easing::Power4Out)
            .stagger(0.2),
        Tween::new(".hero p", 1.0)
            .from(Property::Opacity, num(0.0))
            .from(Property::TranslateY, num(30.0))
            .ease(Easing::Power3Out)
            .offset(-0.5),
        Tween::new(".hero .btn", 0.5)
            .from(Property::Opacity, num(0.0))
            .from(Property::Scale, num(0.8))
            .to(Property::Opacity, num(1.0))
            .to(Property::Scale, num(1.0))
            .ease(Easing::BackOut(1.7))
            .offset(-0.3)
            .clear_after(),
    ]
}

// Body background per section: (section, colour on enter, colour restored on leave back, has end)
const BACKGROUND_STEPS: [(&str, &str, &str, bool); 5] = [
    (".skills-section", "#ffffff", "var(--color-bg-primary)", true),
    (".roadmap-section", "#fff1f2", "#ffffff", true),
    (".projects-section", "#e2e8f0", "#fff1f2", true),
    (".experience-section", "#f8fafc", "#e2e8f0", false),
    (".contact-section", "#fef2f2", "#f8fafc", false),
];

fn background_value(value: &str) -> TweenValue {
    match Color::from_hex(value) {
        Ok(color) => TweenValue::Color(color),
        Err(_) => TweenValue::Token(value.to_string()),
    }
}

pub fn background_shifts() -> Vec<ScrollTrigger> {
    BACKGROUND_STEPS
        .iter()
        .map(|&(section, enter, leave_back, has_end)| ScrollTrigger {
            trigger: section.to_string(),
            start: position("top center"),
            end: has_end.then(|| position("bottom center")),
            on_enter: Some(
                Tween::new("body", 1.0).to(Property::BackgroundColor, background_value(enter)),
            ),
            on_leave_back: Some(
                Tween::new("body", 1.0).to(Property::BackgroundColor, background_value(leave_back)),
            ),
        })
        .collect()
}

fn reveal(target: &str, start: &str, duration: f32, easing: Easing, stagger: f32) -> ScrollTrigger {
    ScrollTrigger {
        trigger: target.to_string(),
        start: position(start),
        end: None,
        on_enter: Some(
            Tween::new(target, duration)
                .from(Property::TranslateY, num(50.0))
                .from(Property::Opacity, num(0.0))
                .ease(easing)
                .stagger(stagger),
        ),
        on_leave_back: None,
    }
}

// Each matched element triggers its own reveal when it scrolls into view
pub fn reveal_triggers() -> Vec<ScrollTrigger> {
    vec![
        reveal(".roadmap-node", "top 80%", 0.8, Easing::Power2Out, 0.0),
        reveal("section h2", "top 80%", 1.0, Easing::Power3Out, 0.0),
        reveal(".project-card", "top 85%", 0.6, Easing::Power2Out, 0.1),
    ]
}

/// Parallax offset for a pointer position: each axis spans
/// `[-PARALLAX_RANGE / 2, PARALLAX_RANGE / 2]` across the viewport.
pub fn parallax_target(pointer: Vec2, viewport: SurfaceSize) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    Vec2::new(
        (pointer.x / viewport.width - 0.5) * PARALLAX_RANGE,
        (pointer.y / viewport.height - 0.5) * PARALLAX_RANGE,
    )
}

pub fn parallax_tween(target: Vec2) -> Tween {
    Tween::new(".hero-elements", 1.0)
        .to(Property::TranslateX, num(target.x))
        .to(Property::TranslateY, num(target.y))
        .ease(Easing::Power1Out)
}

/// An eased 2D motion toward a target that can be retargeted mid-flight,
/// the way a new pointer move overrides the running parallax tween.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxMotion {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl ParallaxMotion {
    pub fn new(tween: &Tween) -> Self {
        Self {
            from: Vec2::ZERO,
            to: Vec2::ZERO,
            elapsed: tween.duration,
            duration: tween.duration,
            easing: tween.easing,
        }
    }

    pub fn current(&self) -> Vec2 {
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        self.from.lerp(self.to, self.easing.apply(t))
    }

    // Restart from wherever the motion is now
    pub fn retarget(&mut self, to: Vec2) {
        self.from = self.current();
        self.to = to;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, seconds: f32) -> Vec2 {
        self.elapsed = (self.elapsed + seconds).min(self.duration);
        self.current()
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        played: Vec<String>,
        observed: Vec<String>,
    }

    impl AnimationEngine for Recorder {
        fn play(&mut self, tween: &Tween) {
            self.played.push(tween.target.clone());
        }

        fn observe(&mut self, trigger: &ScrollTrigger) {
            self.observed.push(trigger.trigger.clone());
        }
    }

    #[test]
    fn easings_hit_both_endpoints() {
        let easings = [
            Easing::Linear,
            Easing::Power1Out,
            Easing::Power2Out,
            Easing::Power3Out,
            Easing::Power4Out,
            Easing::BackOut(1.7),
        ];
        for easing in easings {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn out_easings_lead_linear() {
        assert!(Easing::Power1Out.apply(0.5) > 0.5);
        assert!(Easing::Power4Out.apply(0.5) > Easing::Power1Out.apply(0.5));
        assert_eq!(Easing::Power1Out.apply(0.5), 0.75);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn parses_scroll_positions() {
        assert_eq!(
            "top center".parse::<ScrollPosition>(),
            Ok(ScrollPosition { element: 0.0, viewport: 0.5 })
        );
        assert_eq!(
            "top 80%".parse::<ScrollPosition>(),
            Ok(ScrollPosition { element: 0.0, viewport: 0.8 })
        );
        assert!("top".parse::<ScrollPosition>().is_err());
        assert!("middle 10%".parse::<ScrollPosition>().is_err());
        assert!("top center extra".parse::<ScrollPosition>().is_err());
    }

    #[test]
    fn scroll_offset_meets_viewport_anchor() {
        let start: ScrollPosition = "top center".parse().unwrap();
        assert_eq!(start.scroll_offset(1200.0, 600.0, 800.0), 800.0);
    }

    #[test]
    fn background_shifts_chain_their_colours() {
        let shifts = background_shifts();
        assert_eq!(shifts.len(), 5);
        assert_eq!(
            shifts[0].on_leave_back.as_ref().unwrap().to[0].1,
            TweenValue::Token("var(--color-bg-primary)".to_string())
        );
        // Leaving a section backwards restores the previous section's colour
        for pair in shifts.windows(2) {
            let entered = &pair[0].on_enter.as_ref().unwrap().to[0].1;
            let restored = &pair[1].on_leave_back.as_ref().unwrap().to[0].1;
            assert_eq!(entered, restored);
        }
        assert!(shifts[3].end.is_none());
    }

    #[test]
    fn install_hands_everything_to_the_engine() {
        let effects = PageEffects::portfolio();
        let mut engine = Recorder::default();
        effects.install(&mut engine);

        assert_eq!(engine.played, vec![".hero h1", ".hero p", ".hero .btn"]);
        assert_eq!(engine.observed.len(), 8);
        assert_eq!(engine.observed[7], ".project-card");
    }

    #[test]
    fn project_cards_are_staggered() {
        let cards = &reveal_triggers()[2];
        let tween = cards.on_enter.as_ref().unwrap();
        assert!((tween.start_for(3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn parallax_spans_twenty_units() {
        let viewport = SurfaceSize::new(800.0, 600.0);
        assert_eq!(parallax_target(Vec2::new(400.0, 300.0), viewport), Vec2::ZERO);
        assert_eq!(parallax_target(Vec2::new(0.0, 600.0), viewport), Vec2::new(-10.0, 10.0));
        assert_eq!(parallax_target(Vec2::new(5.0, 5.0), SurfaceSize::new(0.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn parallax_motion_eases_and_retargets() {
        let mut motion = ParallaxMotion::new(&parallax_tween(Vec2::ZERO));
        assert!(motion.is_settled());

        motion.retarget(Vec2::new(10.0, 0.0));
        let halfway = motion.advance(0.5);
        assert!((halfway.x - 7.5).abs() < 1e-4);

        motion.retarget(Vec2::new(-10.0, 0.0));
        assert!((motion.current().x - 7.5).abs() < 1e-4);
        assert_eq!(motion.advance(5.0), Vec2::new(-10.0, 0.0));
        assert!(motion.is_settled());
    }
}
