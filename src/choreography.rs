//! The motion each part of the page uses, in one place.

use crate::motion::{Drift, Ease, EntranceBinding, Hover, Pose, Targets, Timeline, Tween};

pub fn nav_entrance() -> Tween {
    Tween::from(Pose::REST.y(-100.0))
}

pub fn nav_logo_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.05), 0.3)
}

pub fn nav_link_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.1), 0.2)
}

/// A hero tween and the time (s) after mount at which it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub tween: Tween,
    pub start: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroSequence {
    pub title: Step,
    pub subtitle: Step,
    pub description: Step,
    /// Applied to each social link, staggered.
    pub socials: Step,
    /// Applied to each call-to-action button, staggered.
    pub buttons: Step,
}

/// Lays the hero intro out on a timeline; each step overlaps the previous.
pub fn hero_sequence(socials: usize, buttons: usize) -> HeroSequence {
    let mut timeline = Timeline::new();
    let mut step = |tween: Tween, targets: usize, overlap: f64| Step {
        tween,
        start: timeline.push(&tween, targets, overlap),
    };
    HeroSequence {
        title: step(
            Tween::from(Pose::hidden().y(100.0))
                .duration(1.2)
                .ease(Ease::Power4Out),
            1,
            0.0,
        ),
        subtitle: step(Tween::from(Pose::hidden().y(50.0)), 1, 0.6),
        description: step(Tween::from(Pose::hidden().y(30.0)), 1, 0.5),
        socials: step(
            Tween::from(Pose::hidden().scale(0.0).rotate(360.0))
                .duration(0.6)
                .stagger(0.1)
                .ease(Ease::BackOutStrong),
            socials,
            0.4,
        ),
        buttons: step(
            Tween::from(Pose::hidden().y(30.0))
                .duration(0.8)
                .stagger(0.2),
            buttons,
            0.3,
        ),
    }
}

pub fn hero_scroll_bob() -> Drift {
    Drift {
        to: Pose::REST.y(15.0),
        duration: 1.5,
        ease: Ease::Power1InOut,
    }
}

pub fn hero_social_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.2).rotate(5.0), 0.3)
}

pub fn hero_button_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.05), 0.3)
}

pub fn about_bio() -> EntranceBinding {
    EntranceBinding::on_scroll(
        Tween::from(Pose::hidden().x(-100.0)).stagger(0.2),
        Targets::Children,
    )
}

pub fn about_stats() -> EntranceBinding {
    EntranceBinding::on_scroll(
        Tween::from(Pose::hidden().scale(0.0))
            .duration(0.8)
            .stagger(0.15)
            .ease(Ease::BackOut),
        Targets::Children,
    )
}

pub fn stat_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.1), 0.3)
}

pub fn skill_tiles() -> EntranceBinding {
    EntranceBinding::on_scroll(
        Tween::from(Pose::hidden().scale(0.0).rotate(180.0))
            .duration(0.8)
            .stagger(0.1)
            .ease(Ease::BackOut),
        Targets::Children,
    )
}

pub fn skill_categories() -> EntranceBinding {
    EntranceBinding::on_scroll(
        Tween::from(Pose::hidden().y(50.0))
            .duration(0.8)
            .stagger(0.2),
        Targets::Children,
    )
}

pub fn skill_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.15).rotate(5.0), 0.3)
}

pub fn project_cards() -> EntranceBinding {
    EntranceBinding::on_scroll(
        Tween::from(Pose::hidden().y(100.0)).stagger(0.2),
        Targets::Children,
    )
}

pub fn project_hover() -> Hover {
    Hover::new(Pose::REST.y(-15.0), 0.4)
}

pub fn project_link_hover() -> Hover {
    Hover::new(Pose::REST.scale(1.1), 0.2)
}

pub fn contact_info() -> EntranceBinding {
    EntranceBinding::on_scroll(Tween::from(Pose::hidden().x(-100.0)), Targets::Container)
}

pub fn contact_form() -> EntranceBinding {
    EntranceBinding::on_scroll(
        Tween::from(Pose::hidden().x(100.0))
            .duration(0.8)
            .stagger(0.1),
        Targets::Children,
    )
}

pub fn contact_row_hover() -> Hover {
    Hover::new(Pose::REST.x(10.0), 0.3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ScrollTrigger;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hero_sequence_starts() {
        let seq = hero_sequence(3, 2);
        let starts = [
            seq.title.start,
            seq.subtitle.start,
            seq.description.start,
            seq.socials.start,
            seq.buttons.start,
        ];
        for (got, want) in starts.iter().zip([0.0, 0.6, 1.1, 1.7, 2.2]) {
            assert!(approx(*got, want), "got {got}, want {want}");
        }
    }

    #[test]
    fn test_hero_sequence_depends_on_social_count() {
        // with a single social link the stagger tail disappears
        let seq = hero_sequence(1, 2);
        assert!(approx(seq.buttons.start, 2.0));
    }

    #[test]
    fn test_scroll_entrances_share_trigger() {
        let bindings = [
            EntranceBinding::heading(),
            about_bio(),
            about_stats(),
            skill_tiles(),
            skill_categories(),
            project_cards(),
            contact_info(),
            contact_form(),
        ];
        for binding in bindings {
            assert_eq!(binding.trigger, ScrollTrigger::default());
            assert!(binding.tween.from.opacity < 1.0, "entrances fade in");
        }
    }

    #[test]
    fn test_hovers_leave_to_rest() {
        let hovers = [
            nav_logo_hover(),
            nav_link_hover(),
            hero_social_hover(),
            hero_button_hover(),
            stat_hover(),
            skill_hover(),
            project_hover(),
            project_link_hover(),
            contact_row_hover(),
        ];
        for hover in hovers {
            assert_ne!(hover.enter(), hover.leave());
            assert_eq!(hover.leave()[1].1, Pose::REST.transform());
        }
    }

    #[test]
    fn test_nav_slides_without_fading() {
        let tween = nav_entrance();
        assert_eq!(tween.from.opacity, 1.0);
        assert_eq!(tween.from.y, -100.0);
    }
}
