//! Read-only catalog data: the campus event listing, the hostel menu and the
//! weekly timetables. These are fixed datasets served as-is, never persisted
//! and never mutated; a catalog event only enters durable storage when a
//! student adds it to their calendar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusEvent {
    pub id: String,
    pub title: String,
    pub category: CampusEventCategory,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampusEventCategory {
    Cultural,
    Sports,
    Academic,
    Club,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub meal: Meal,
    pub time: String,
    pub items: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub day: String,
    pub meals: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub day: String,
    pub time: String,
    pub subject: String,
    pub room: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
}

pub fn campus_events() -> Vec<CampusEvent> {
    vec![
        CampusEvent {
            id: "ev1".into(),
            title: "Annual Cultural Fest: AARAMBH".into(),
            category: CampusEventCategory::Cultural,
            date: "August 20, 2024".into(),
            time: "5:00 PM onwards".into(),
            location: "Main Auditorium".into(),
            description: "Join us for a night of music, dance, and drama as we welcome the freshers batch!".into(),
        },
        CampusEvent {
            id: "ev2".into(),
            title: "Inter-Department Cricket Finals".into(),
            category: CampusEventCategory::Sports,
            date: "August 25, 2024".into(),
            time: "9:00 AM".into(),
            location: "University Ground".into(),
            description: "CSE vs ECE. Come support your department in the grand finale of the Chancellor's Trophy.".into(),
        },
        CampusEvent {
            id: "ev3".into(),
            title: "Guest Lecture: Future of AI".into(),
            category: CampusEventCategory::Academic,
            date: "August 28, 2024".into(),
            time: "2:00 PM".into(),
            location: "Seminar Hall 2".into(),
            description: "Dr. S. Rao from Tech Institute will speak about Generative AI and its impact on jobs.".into(),
        },
        CampusEvent {
            id: "ev4".into(),
            title: "Music Club Jam Session".into(),
            category: CampusEventCategory::Club,
            date: "June 02, 2024".into(),
            time: "6:00 PM".into(),
            location: "Amphitheater".into(),
            description: "Open mic for all students. Bring your instruments or just your voice.".into(),
        },
    ]
}

pub fn hostel_menu() -> Vec<DailyMenu> {
    fn item(meal: Meal, time: &str, items: &str) -> MenuItem {
        MenuItem { meal, time: time.into(), items: items.into() }
    }

    vec![
        DailyMenu {
            day: "Monday".into(),
            meals: vec![
                item(Meal::Breakfast, "7:30 AM - 9:00 AM", "Idli, Sambar, Chutney, Coffee/Tea"),
                item(Meal::Lunch, "12:30 PM - 2:00 PM", "Rice, Dal Fry, Mixed Veg Curry, Curd, Pickle"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Samosa, Tea"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Chapati, Potato Kurma, Rice, Rasam"),
            ],
        },
        DailyMenu {
            day: "Tuesday".into(),
            meals: vec![
                item(Meal::Breakfast, "7:30 AM - 9:00 AM", "Puri, Potato Masala, Coffee/Tea"),
                item(Meal::Lunch, "12:30 PM - 2:00 PM", "Lemon Rice, Sambar, Potato Fry, Curd"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Biscuits, Coffee"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Rice, Egg Curry (or Paneer Butter Masala), Dal"),
            ],
        },
        DailyMenu {
            day: "Wednesday".into(),
            meals: vec![
                item(Meal::Breakfast, "7:30 AM - 9:00 AM", "Upma"),
                item(Meal::Lunch, "12:30 PM - 2:00 PM", "Veg Biryani"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Bajji"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Dosa"),
            ],
        },
        DailyMenu {
            day: "Thursday".into(),
            meals: vec![
                item(Meal::Breakfast, "7:30 AM - 9:00 AM", "Pongal"),
                item(Meal::Lunch, "12:30 PM - 2:00 PM", "Rice, Sambhar"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Cake"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Chapati, Dal"),
            ],
        },
        DailyMenu {
            day: "Friday".into(),
            meals: vec![
                item(Meal::Breakfast, "7:30 AM - 9:00 AM", "Vada"),
                item(Meal::Lunch, "12:30 PM - 2:00 PM", "Full Meals"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Puffs"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Fried Rice"),
            ],
        },
        DailyMenu {
            day: "Saturday".into(),
            meals: vec![
                item(Meal::Breakfast, "7:30 AM - 9:00 AM", "Dosa"),
                item(Meal::Lunch, "12:30 PM - 2:00 PM", "Rice, Dal"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Corn"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Chapati"),
            ],
        },
        DailyMenu {
            day: "Sunday".into(),
            meals: vec![
                item(Meal::Breakfast, "8:00 AM - 9:30 AM", "Masala Dosa"),
                item(Meal::Lunch, "12:30 PM - 2:30 PM", "Chicken Biryani / Veg Pulao"),
                item(Meal::Snacks, "4:30 PM - 5:30 PM", "Fruit Salad"),
                item(Meal::Dinner, "7:30 PM - 9:00 PM", "Rice, Rasam"),
            ],
        },
    ]
}

pub fn student_timetable() -> Vec<TimetableSlot> {
    fn slot(day: &str, time: &str, subject: &str, room: &str, kind: &str, faculty: &str) -> TimetableSlot {
        TimetableSlot {
            day: day.into(),
            time: time.into(),
            subject: subject.into(),
            room: room.into(),
            kind: kind.into(),
            batch: None,
            faculty: Some(faculty.into()),
        }
    }

    vec![
        slot("Monday", "09:00 - 09:50", "Database Management", "LH-105", "Lecture", "Dr. Smith"),
        slot("Monday", "09:50 - 10:40", "Operating Systems", "LH-105", "Lecture", "Prof. Jones"),
        slot("Monday", "11:00 - 12:40", "Web Technologies Lab", "Lab-2", "Lab", "Ms. Davis"),
        slot("Tuesday", "09:00 - 10:40", "Computer Networks", "LH-105", "Lecture", "Mr. Wilson"),
        slot("Tuesday", "11:00 - 11:50", "Soft Skills", "LH-105", "Lecture", "Mrs. Brown"),
        slot("Tuesday", "14:00 - 16:00", "Library Hour", "Library", "Self Study", "-"),
        slot("Wednesday", "09:00 - 09:50", "Probability & Stats", "LH-105", "Lecture", "Dr. Mathur"),
        slot("Wednesday", "09:50 - 10:40", "Database Management", "LH-105", "Lecture", "Dr. Smith"),
        slot("Wednesday", "14:00 - 16:00", "DBMS Lab", "Lab-1", "Lab", "Dr. Smith"),
        slot("Thursday", "09:00 - 10:40", "Operating Systems", "LH-105", "Lecture", "Prof. Jones"),
        slot("Thursday", "11:00 - 11:50", "Computer Networks", "LH-105", "Lecture", "Mr. Wilson"),
        slot("Friday", "09:00 - 11:30", "Mini Project", "Innovation Hub", "Practical", "Various"),
        slot("Friday", "14:00 - 15:00", "Sports / Club", "Ground", "Extra-curricular", "-"),
        slot("Saturday", "09:00 - 12:00", "Placement Training", "Auditorium", "Workshop", "External"),
    ]
}

pub fn faculty_timetable() -> Vec<TimetableSlot> {
    fn slot(day: &str, time: &str, subject: &str, batch: &str, room: &str, kind: &str) -> TimetableSlot {
        TimetableSlot {
            day: day.into(),
            time: time.into(),
            subject: subject.into(),
            room: room.into(),
            kind: kind.into(),
            batch: Some(batch.into()),
            faculty: None,
        }
    }

    vec![
        slot("Monday", "09:00 - 10:40", "Advanced Algorithms", "CSE-3A", "LH-102", "Lecture"),
        slot("Monday", "14:00 - 16:00", "Project Review", "CSE-4B", "Lab-3", "Lab"),
        slot("Tuesday", "10:40 - 11:30", "Mentoring Hour", "CSE-2C", "Faculty Cabin", "Mentoring"),
        slot("Tuesday", "11:30 - 13:10", "Advanced Algorithms", "CSE-3B", "LH-104", "Lecture"),
        slot("Wednesday", "09:00 - 10:40", "Machine Learning", "AIML-3A", "LH-201", "Lecture"),
        slot("Wednesday", "14:00 - 16:00", "ML Lab", "AIML-3A", "Lab-AI", "Lab"),
        slot("Thursday", "09:50 - 11:30", "Department Meeting", "Faculty", "Conf Room", "Meeting"),
    ]
}
