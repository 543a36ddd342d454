use app::content::{
    Section, Skill, EDUCATION, EMAIL_LINK, PROFILE, PROJECTS, SKILLS, TYPEWRITER_PHRASES,
    WHATSAPP_LINK,
};
use app::errors::Error;
use app::state::glow::GLOW_OFFSET_PX;
use app::state::{Cursor, GlowPosition};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn sections_are_addressed_by_id() {
    setup();

    let ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
    assert_eq!(vec!["home", "about", "projects", "skills", "contact"], ids);
    for section in Section::ALL {
        assert_eq!(Ok(section), section.id().parse());
        assert_eq!(section.id().to_uppercase(), section.label());
    }
    assert_eq!(
        Err(Error::UnknownSection { id: String::from("blog") }),
        "blog".parse::<Section>()
    );
}

#[test]
fn skill_bars_are_clamped() {
    setup();

    let skill = Skill {
        name: "Overconfidence",
        level: 150,
        icon: "",
        description: "",
    };
    assert_eq!(0, skill.bar_width(false));
    assert_eq!(100, skill.bar_width(true));
    assert_eq!("100%", skill.level_label());
    assert_eq!("90%", Skill { level: 90, ..skill }.level_label());
    for skill in SKILLS {
        assert!(skill.bar_width(true) <= Skill::MAX_LEVEL);
    }
}

#[test]
fn site_content_is_filled_in() {
    setup();

    assert!(!TYPEWRITER_PHRASES.is_empty());
    assert_eq!(4, PROJECTS.len());
    assert_eq!(6, SKILLS.len());
    assert_eq!("2024-2025", EDUCATION[0].years);
}

#[test]
fn glow_is_centered_on_the_pointer() {
    setup();

    for (x, y) in [(0, 0), (192, 192), (640, 480), (-5, 10_000)] {
        let glow = GlowPosition::from_pointer(x, y);
        assert_eq!(x - GLOW_OFFSET_PX, glow.left);
        assert_eq!(y - GLOW_OFFSET_PX, glow.top);
    }
    assert_eq!(GlowPosition { top: -192, left: -192 }, GlowPosition::default());
}

#[test]
fn cursor_alternates_on_each_blink() {
    setup();

    let mut cursor = Cursor::default();
    assert!(cursor.is_visible());
    for i in 1..=6 {
        cursor.blink();
        assert_eq!(i % 2 == 0, cursor.is_visible());
    }
}

#[test]
fn direct_contact_links_match_the_profile() {
    setup();

    assert!(EMAIL_LINK.href.ends_with(EMAIL_LINK.text));
    assert!(PROFILE.emails.contains(&EMAIL_LINK.text));

    let digits = |text: &str| text.chars().filter(char::is_ascii_digit).collect::<String>();
    assert!(WHATSAPP_LINK.href.ends_with(&digits(WHATSAPP_LINK.text)));
    assert!(PROFILE
        .phones
        .iter()
        .any(|phone| phone.starts_with(WHATSAPP_LINK.text) && phone.contains("WhatsApp")));
}
