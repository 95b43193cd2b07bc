//! 組み込みの静的データ
//!
//! ダッシュボード・アプリストア・予約画面の初期表示データ。

use super::app::{AppFeature, AppRecord};
use super::booking::{Booking, BookingStatus};
use super::category::Category;
use super::dashboard::{ActivityEntry, QuickAction, Stat, Tone};

/// 予約画面の初期選択日
pub const DEFAULT_BOOKING_DATE: &str = "2024-01-15";

/// 「すべて」センチネルの表示名
pub const ALL_APPS_LABEL: &str = "All Apps";

/// おすすめ欄の見出し
pub const FEATURED_APPS_LABEL: &str = "Featured Apps";

const MB_BOOKINGS_LONG_DESCRIPTION: &str = "\
MB Bookings is a comprehensive appointment management solution designed specifically for professionals and businesses. With its intuitive interface and powerful features, you can easily manage your schedule, track appointments, and provide excellent customer service.

Key features include:
• Advanced calendar management with multiple view options
• Automated email and SMS reminders
• Client management and history tracking
• Customizable booking forms and services
• Real-time availability checking
• Comprehensive reporting and analytics
• Integration with popular calendar applications
• Mobile-responsive design for on-the-go management

Whether you're a consultant, healthcare provider, service professional, or run a business with appointment-based services, MB Bookings provides all the tools you need to manage your schedule efficiently and professionally.";

/// アプリカテゴリ定義（センチネルを除く）
pub fn app_categories() -> Vec<Category> {
    vec![
        Category::new("productivity", "Productivity"),
        Category::new("business", "Business"),
        Category::new("communication", "Communication"),
        Category::new("analytics", "Analytics"),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn feature(title: &str, description: &str) -> AppFeature {
    AppFeature {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// アプリ一覧
pub fn apps() -> Vec<AppRecord> {
    vec![
        AppRecord {
            id: "mb-bookings".to_string(),
            name: "MB Bookings".to_string(),
            developer: "ModelBoard".to_string(),
            category: "business".to_string(),
            description: "Complete booking and appointment management system for professionals"
                .to_string(),
            rating: 4.9,
            downloads: "10K+".to_string(),
            price: "Free".to_string(),
            installed: true,
            featured: true,
            screenshots: strings(&[
                "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800&h=600&fit=crop",
                "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=800&h=600&fit=crop",
            ]),
            long_description: Some(MB_BOOKINGS_LONG_DESCRIPTION.to_string()),
            version: Some("2.1.0".to_string()),
            size: Some("12.5 MB".to_string()),
            compatibility: strings(&["Web", "Mobile"]),
            permissions: strings(&["Calendar Access", "Notifications", "Contact Management"]),
            last_updated: Some("2024-01-15".to_string()),
            features: vec![
                feature(
                    "Smart Scheduling",
                    "AI-powered scheduling that prevents double bookings and optimizes your calendar",
                ),
                feature(
                    "Client Management",
                    "Comprehensive client profiles with booking history and preferences",
                ),
                feature(
                    "Automated Reminders",
                    "Reduce no-shows with automated email and SMS reminder notifications",
                ),
                feature(
                    "Reporting & Analytics",
                    "Detailed insights into your booking patterns and business performance",
                ),
            ],
        },
        AppRecord {
            id: "mb-analytics".to_string(),
            name: "MB Analytics".to_string(),
            developer: "ModelBoard".to_string(),
            category: "analytics".to_string(),
            description: "Advanced analytics and reporting tools for your business data"
                .to_string(),
            rating: 4.7,
            downloads: "5K+".to_string(),
            price: "$9.99/month".to_string(),
            installed: false,
            featured: false,
            screenshots: vec![],
            long_description: None,
            version: None,
            size: None,
            compatibility: vec![],
            permissions: vec![],
            last_updated: None,
            features: vec![],
        },
        AppRecord {
            id: "mb-messenger".to_string(),
            name: "MB Messenger".to_string(),
            developer: "ModelBoard".to_string(),
            category: "communication".to_string(),
            description: "Secure messaging and communication platform for teams".to_string(),
            rating: 4.8,
            downloads: "15K+".to_string(),
            price: "Free".to_string(),
            installed: false,
            featured: true,
            screenshots: vec![],
            long_description: None,
            version: None,
            size: None,
            compatibility: vec![],
            permissions: vec![],
            last_updated: None,
            features: vec![],
        },
    ]
}

fn booking(
    id: &str,
    client: &str,
    service: &str,
    slot: (&str, &str),
    status: BookingStatus,
    contact: (&str, &str),
    notes: &str,
) -> Booking {
    Booking {
        id: id.to_string(),
        client: client.to_string(),
        service: service.to_string(),
        time: slot.0.to_string(),
        duration: slot.1.to_string(),
        status,
        phone: contact.0.to_string(),
        email: contact.1.to_string(),
        notes: notes.to_string(),
    }
}

/// 本日の予約一覧
pub fn bookings() -> Vec<Booking> {
    vec![
        booking(
            "1",
            "John Smith",
            "Business Consultation",
            ("09:00 AM", "1 hour"),
            BookingStatus::Confirmed,
            ("+1 (555) 123-4567", "john.smith@email.com"),
            "First-time consultation about marketing strategy",
        ),
        booking(
            "2",
            "Sarah Johnson",
            "Project Review",
            ("02:00 PM", "45 minutes"),
            BookingStatus::Pending,
            ("+1 (555) 987-6543", "sarah.j@company.com"),
            "Quarterly project review meeting",
        ),
        booking(
            "3",
            "Mike Wilson",
            "Strategy Session",
            ("04:30 PM", "1.5 hours"),
            BookingStatus::Confirmed,
            ("+1 (555) 456-7890", "mike.wilson@startup.com"),
            "Discuss growth strategy for Q2",
        ),
    ]
}

/// ホーム画面の統計カード
pub fn home_stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Active Apps",
            value: "1",
            tone: Tone::Primary,
        },
        Stat {
            label: "Total Bookings",
            value: "247",
            tone: Tone::Success,
        },
        Stat {
            label: "Growth Rate",
            value: "+12%",
            tone: Tone::Warning,
        },
        Stat {
            label: "Active Users",
            value: "1,234",
            tone: Tone::Error,
        },
    ]
}

/// ホーム画面のクイックアクション
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Browse App Store",
            description: "Discover and install new business applications",
            href: "/app-store",
        },
        QuickAction {
            title: "Open MB Bookings",
            description: "Manage your appointments and bookings",
            href: "/apps/bookings",
        },
    ]
}

/// ホーム画面の最近のアクティビティ
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            title: "MB Bookings app installed",
            when: "2 hours ago",
            tone: Tone::Success,
        },
        ActivityEntry {
            title: "New booking received",
            when: "4 hours ago",
            tone: Tone::Primary,
        },
        ActivityEntry {
            title: "System update available",
            when: "1 day ago",
            tone: Tone::Warning,
        },
    ]
}

/// 予約画面の統計カード
pub fn booking_stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Today's Bookings",
            value: "3",
            tone: Tone::Primary,
        },
        Stat {
            label: "This Week",
            value: "12",
            tone: Tone::Success,
        },
        Stat {
            label: "Pending",
            value: "1",
            tone: Tone::Warning,
        },
        Stat {
            label: "Total Revenue",
            value: "$2,450",
            tone: Tone::Purple,
        },
    ]
}

/// 予約画面の今後の予定
pub fn upcoming() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            title: "Team Meeting",
            when: "Tomorrow at 10:00 AM",
            tone: Tone::Primary,
        },
        ActivityEntry {
            title: "Client Presentation",
            when: "Wednesday at 2:00 PM",
            tone: Tone::Success,
        },
        ActivityEntry {
            title: "Project Review",
            when: "Friday at 11:00 AM",
            tone: Tone::Warning,
        },
    ]
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
