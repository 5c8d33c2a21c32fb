use std::str::FromStr;

/// Vertical scroll offset (px) past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// The page sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id the section renders with.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// The `name` attribute of the matching form control.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            _ => Err(format!("no such form field: {s}")),
        }
    }
}

/// What the visitor has typed into the contact form so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Updates the field named by a control's `name` attribute.
    /// Returns false (and changes nothing) for an unknown name.
    pub fn set_named(&mut self, name: &str, value: String) -> bool {
        match name.parse::<FormField>() {
            Ok(field) => {
                self.set(field, value);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(-20.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(10_000.0));
    }

    #[test]
    fn test_menu_toggle_parity() {
        for toggles in 0..12 {
            let mut menu = MenuState::default();
            for _ in 0..toggles {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), toggles % 2 == 1, "after {toggles} toggles");
        }
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_sections_in_order() {
        let anchors = Section::ALL.iter().map(|s| s.anchor()).collect::<Vec<_>>();
        assert_eq!(anchors, vec!["home", "about", "skills", "projects", "contact"]);
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::Contact.label(), "Contact");
    }

    #[test]
    fn test_form_keeps_latest_value_per_field() {
        let mut form = ContactForm::default();
        form.set(FormField::Name, "A".to_string());
        form.set(FormField::Name, "Ad".to_string());
        form.set(FormField::Message, "Hi".to_string());
        form.set(FormField::Name, "Ada".to_string());
        assert_eq!(form.get(FormField::Name), "Ada");
        assert_eq!(form.get(FormField::Message), "Hi");
        assert_eq!(form.get(FormField::Email), "");
    }

    #[test]
    fn test_form_set_named() {
        let mut form = ContactForm::default();
        assert!(form.set_named("email", "ada@example.com".to_string()));
        assert!(!form.set_named("phone", "123".to_string()));
        assert_eq!(
            form,
            ContactForm {
                email: "ada@example.com".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            assert_eq!(field.name().parse::<FormField>(), Ok(field));
        }
    }
}
