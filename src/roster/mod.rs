//! Roster
//!
//! The fixed list of children shown on the board, plus the score helpers
//! the cards use to decide who wears the crown.

/// A named reward with a completion percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gift {
    /// Display name
    pub name: String,
    /// Completion in percent (0 - 100)
    pub progress: u8,
}

/// One tracked child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// Display name
    pub name: String,
    /// Avatar image path, relative to the assets directory
    pub avatar_path: String,
    /// Point total
    pub points: u32,
    /// Acquired skills, in display order
    pub skills: Vec<String>,
    /// Gifts being worked towards, in display order
    pub gifts: Vec<Gift>,
}

impl Child {
    fn new(name: &str, avatar_path: &str, points: u32, skills: &[&str], gifts: &[(&str, u8)]) -> Self {
        Self {
            name: name.to_string(),
            avatar_path: avatar_path.to_string(),
            points,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            gifts: gifts
                .iter()
                .map(|(name, progress)| Gift {
                    name: name.to_string(),
                    progress: *progress,
                })
                .collect(),
        }
    }
}

/// The children shown on the board
pub fn default_roster() -> Vec<Child> {
    vec![
        Child::new(
            "بنان",
            "images/benan.png",
            1400,
            &["الكتابة", "الفنون", "القيادة"],
            &[("أدوات رسم", 90), ("مجموعة كتب", 50)],
        ),
        Child::new(
            "حمزة",
            "images/hamza.png",
            980,
            &["الرياضة", "العلوم", "الحاسوب"],
            &[("كرة قدم", 60), ("روبوت تعليمي", 30)],
        ),
        Child::new(
            "سارة",
            "images/sare.png",
            1250,
            &["الرسم", "القراءة", "الموسيقى"],
            &[("دمية", 75), ("كتب قصص", 40)],
        ),
    ]
}

/// Highest point total across the whole roster, `None` when it is empty
pub fn highest_score(children: &[Child]) -> Option<u32> {
    children.iter().map(|c| c.points).max()
}

/// Crown flags in roster order.
///
/// Every child whose points equal the maximum gets a crown, so ties produce
/// several crowns.
pub fn crowned(children: &[Child]) -> Vec<bool> {
    let best = highest_score(children);
    children.iter().map(|c| Some(c.points) == best).collect()
}
