//! Seeded demo data for the site and the admin dashboard.
//!
//! Everything here is held in memory for the session. Edits made in the
//! admin view mutate these collections but are never persisted.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    AlertSeverity, ApiIntegration, Celebrity, CelebrityBooking, Competition, DailyRevenue, EmergencyContact,
    EntryDirection, EntryEvent, Facility, FacilityStatus, FacilityUnit, FestivalDay, GateActivity, Guideline,
    HourlyFlow, IntegrationStatus, LineupStatus, OpsAlert, PassType, PaymentGateway, PaymentMethodShare,
    PaymentStatus, RevenueSlice, ScheduleItem, ScheduleKind, ScheduleNote, SkillLevel, TicketRecord, TicketStatus,
    UserAccount, VenueInfo, VenueZone, Workshop, AccountStatus, EntryStatus,
};
use crate::roles::Role;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Everything the app works on, seeded in one call.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub celebrities: Vec<Celebrity>,
    pub festival_days: Vec<FestivalDay>,
    pub pass_types: Vec<PassType>,
    pub venue: VenueInfo,
    pub facilities: Vec<Facility>,
    pub guidelines: Vec<Guideline>,
    pub tickets: Vec<TicketRecord>,
    pub users: Vec<UserAccount>,
    pub venue_zones: Vec<VenueZone>,
    pub facility_units: Vec<FacilityUnit>,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub gates: Vec<GateActivity>,
    pub hourly_flow: Vec<HourlyFlow>,
    pub recent_entries: Vec<EntryEvent>,
    pub alerts: Vec<OpsAlert>,
    pub revenue_by_pass: Vec<RevenueSlice>,
    pub daily_revenue: Vec<DailyRevenue>,
    pub payment_methods: Vec<PaymentMethodShare>,
    pub schedule_items: Vec<ScheduleItem>,
    pub celebrity_bookings: Vec<CelebrityBooking>,
    pub schedule_notes: Vec<ScheduleNote>,
    pub payment_gateways: Vec<PaymentGateway>,
    pub integrations: Vec<ApiIntegration>,
}

impl DemoData {
    pub fn seed() -> Self {
        Self {
            celebrities: celebrities(),
            festival_days: festival_days(),
            pass_types: pass_types(),
            venue: venue_info(),
            facilities: facilities(),
            guidelines: guidelines(),
            tickets: ticket_records(),
            users: user_accounts(),
            venue_zones: venue_zones(),
            facility_units: facility_units(),
            emergency_contacts: emergency_contacts(),
            gates: gate_activity(),
            hourly_flow: hourly_flow(),
            recent_entries: recent_entries(),
            alerts: ops_alerts(),
            revenue_by_pass: revenue_by_pass(),
            daily_revenue: daily_revenue(),
            payment_methods: payment_methods(),
            schedule_items: opening_night_schedule(),
            celebrity_bookings: celebrity_bookings(),
            schedule_notes: schedule_notes(),
            payment_gateways: payment_gateways(),
            integrations: api_integrations(),
        }
    }
}

pub fn celebrities() -> Vec<Celebrity> {
    vec![
        Celebrity {
            id: "1".to_string(),
            name: "Falguni Pathak".to_string(),
            bio: "The Dandiya Queen of India, known for her mesmerizing voice and traditional folk songs.".to_string(),
            performance_date: date(2024, 10, 15),
            performance_time: "21:00".to_string(),
            instagram: Some("@falgunipathak".to_string()),
            facebook: Some("FalguniPathakOfficial".to_string()),
            past_performances: vec!["Navratri 2023".to_string(), "Garba Mahotsav 2022".to_string()],
            meet_and_greet: true,
        },
        Celebrity {
            id: "2".to_string(),
            name: "Kinjal Dave".to_string(),
            bio: "Popular Gujarati folk singer and performer, bringing modern energy to traditional Garba.".to_string(),
            performance_date: date(2024, 10, 16),
            performance_time: "20:30".to_string(),
            instagram: Some("@kinjaldave".to_string()),
            facebook: Some("KinjalDaveOfficial".to_string()),
            past_performances: vec!["Navratri 2023".to_string(), "Folk Festival 2022".to_string()],
            meet_and_greet: true,
        },
        Celebrity {
            id: "3".to_string(),
            name: "Parthiv Gohil".to_string(),
            bio: "Renowned playback singer and folk artist, known for his soulful Garba performances.".to_string(),
            performance_date: date(2024, 10, 17),
            performance_time: "21:30".to_string(),
            instagram: Some("@parthivgohil".to_string()),
            facebook: Some("ParthivGohilOfficial".to_string()),
            past_performances: vec!["Navratri 2023".to_string(), "Classical Evening 2022".to_string()],
            meet_and_greet: false,
        },
    ]
}

pub fn festival_days() -> Vec<FestivalDay> {
    vec![
        FestivalDay {
            id: "1".to_string(),
            title: "Opening Night - Traditional Garba".to_string(),
            date: date(2024, 10, 15),
            time: "19:00".to_string(),
            description: "Experience the magic of traditional Garba with classical folk songs and dance.".to_string(),
            theme: "Classical Heritage".to_string(),
            celebrity_ids: vec!["1".to_string()],
            workshops: vec![Workshop {
                id: "1".to_string(),
                title: "Basic Garba Steps".to_string(),
                instructor: "Meera Patel".to_string(),
                time: "17:00".to_string(),
                duration: "90 minutes".to_string(),
                level: SkillLevel::Beginner,
            }],
            competitions: vec![Competition {
                id: "1".to_string(),
                title: "Best Traditional Costume".to_string(),
                time: "22:00".to_string(),
                category: "Costume".to_string(),
                prizes: vec!["\u{20B9}10,000".to_string(), "\u{20B9}5,000".to_string(), "\u{20B9}3,000".to_string()],
            }],
        },
        FestivalDay {
            id: "2".to_string(),
            title: "Bollywood Fusion Night".to_string(),
            date: date(2024, 10, 16),
            time: "19:00".to_string(),
            description: "Modern Bollywood hits meet traditional Garba in this exciting fusion evening.".to_string(),
            theme: "Bollywood Fusion".to_string(),
            celebrity_ids: vec!["2".to_string()],
            workshops: vec![Workshop {
                id: "2".to_string(),
                title: "Bollywood Garba Fusion".to_string(),
                instructor: "Raj Sharma".to_string(),
                time: "17:30".to_string(),
                duration: "2 hours".to_string(),
                level: SkillLevel::Intermediate,
            }],
            competitions: vec![Competition {
                id: "2".to_string(),
                title: "Dance Battle".to_string(),
                time: "23:00".to_string(),
                category: "Dance".to_string(),
                prizes: vec!["\u{20B9}15,000".to_string(), "\u{20B9}8,000".to_string(), "\u{20B9}5,000".to_string()],
            }],
        },
        FestivalDay {
            id: "3".to_string(),
            title: "Regional Folk Night".to_string(),
            date: date(2024, 10, 17),
            time: "19:00".to_string(),
            description: "A journey through Gujarat's folk traditions with raas and regional styles.".to_string(),
            theme: "Cultural Diversity".to_string(),
            celebrity_ids: vec!["3".to_string()],
            workshops: vec![Workshop {
                id: "3".to_string(),
                title: "Kathiyawadi Raas".to_string(),
                instructor: "Heena Joshi".to_string(),
                time: "17:00".to_string(),
                duration: "90 minutes".to_string(),
                level: SkillLevel::Intermediate,
            }],
            competitions: vec![Competition {
                id: "3".to_string(),
                title: "Raas Group Showcase".to_string(),
                time: "22:30".to_string(),
                category: "Group".to_string(),
                prizes: vec!["\u{20B9}12,000".to_string(), "\u{20B9}6,000".to_string(), "\u{20B9}4,000".to_string()],
            }],
        },
        FestivalDay {
            id: "4".to_string(),
            title: "Youth Night".to_string(),
            date: date(2024, 10, 18),
            time: "19:00".to_string(),
            description: "High-energy garba for college crowds with live DJ sets between rounds.".to_string(),
            theme: "Energy & Enthusiasm".to_string(),
            celebrity_ids: vec![],
            workshops: vec![Workshop {
                id: "4".to_string(),
                title: "DJ Garba Remix Session".to_string(),
                instructor: "Aman Trivedi".to_string(),
                time: "18:00".to_string(),
                duration: "1 hour".to_string(),
                level: SkillLevel::Beginner,
            }],
            competitions: vec![Competition {
                id: "4".to_string(),
                title: "College Face-off".to_string(),
                time: "23:00".to_string(),
                category: "Youth".to_string(),
                prizes: vec!["\u{20B9}20,000".to_string(), "\u{20B9}10,000".to_string(), "\u{20B9}5,000".to_string()],
            }],
        },
        FestivalDay {
            id: "5".to_string(),
            title: "Grand Finale - Unity Night".to_string(),
            date: date(2024, 10, 19),
            time: "18:00".to_string(),
            description: "The grand finale celebrating unity and joy with all celebrities performing together.".to_string(),
            theme: "Unity Celebration".to_string(),
            celebrity_ids: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            workshops: vec![Workshop {
                id: "5".to_string(),
                title: "Advanced Choreography".to_string(),
                instructor: "Priya Desai".to_string(),
                time: "16:00".to_string(),
                duration: "2.5 hours".to_string(),
                level: SkillLevel::Advanced,
            }],
            competitions: vec![Competition {
                id: "5".to_string(),
                title: "Grand Championship".to_string(),
                time: "22:30".to_string(),
                category: "Overall".to_string(),
                prizes: vec!["\u{20B9}50,000".to_string(), "\u{20B9}25,000".to_string(), "\u{20B9}15,000".to_string()],
            }],
        },
    ]
}

pub fn pass_types() -> Vec<PassType> {
    vec![
        PassType {
            id: "individual-male".to_string(),
            name: "Individual Pass (Male)".to_string(),
            description: "Single person entry".to_string(),
            max_persons: 1,
            full_event_price: 2499,
            single_day_price: 599,
            features: vec![
                "All event access".to_string(),
                "Food court access".to_string(),
                "Workshop participation".to_string(),
                "Competition entry".to_string(),
            ],
        },
        PassType {
            id: "individual-female".to_string(),
            name: "Individual Pass (Female)".to_string(),
            description: "Single person entry".to_string(),
            max_persons: 1,
            full_event_price: 2299,
            single_day_price: 549,
            features: vec![
                "All event access".to_string(),
                "Food court access".to_string(),
                "Workshop participation".to_string(),
                "Competition entry".to_string(),
                "Ladies special events".to_string(),
            ],
        },
        PassType {
            id: "couple".to_string(),
            name: "Couple Pass".to_string(),
            description: "2 persons entry".to_string(),
            max_persons: 2,
            full_event_price: 4299,
            single_day_price: 999,
            features: vec![
                "All event access".to_string(),
                "Food court access".to_string(),
                "Workshop participation".to_string(),
                "Competition entry".to_string(),
                "Couple dance competitions".to_string(),
                "Photo booth access".to_string(),
            ],
        },
        PassType {
            id: "family".to_string(),
            name: "Family Pass".to_string(),
            description: "Up to 4 persons".to_string(),
            max_persons: 4,
            full_event_price: 7999,
            single_day_price: 1799,
            features: vec![
                "All event access".to_string(),
                "Food court access".to_string(),
                "Workshop participation".to_string(),
                "Competition entry".to_string(),
                "Kids play area".to_string(),
                "Family photo sessions".to_string(),
                "Priority seating".to_string(),
            ],
        },
    ]
}

pub fn venue_info() -> VenueInfo {
    VenueInfo {
        name: "Garba Ground, Ahmedabad".to_string(),
        address: "Sardar Patel Stadium Complex, Ahmedabad, Gujarat 380009".to_string(),
        capacity: 50_000,
        lat: 23.0225,
        lng: 72.5714,
        entry_points: vec![
            "Main Gate".to_string(),
            "North Gate".to_string(),
            "South Gate".to_string(),
            "VIP Entrance".to_string(),
        ],
        parking_zones: vec![
            "Zone A".to_string(),
            "Zone B".to_string(),
            "Zone C".to_string(),
            "VIP Parking".to_string(),
        ],
    }
}

pub fn facilities() -> Vec<Facility> {
    [
        ("Food Court", "50+ food stalls with variety of cuisines"),
        ("Rest Areas", "Comfortable seating areas throughout the venue"),
        ("First Aid", "24/7 medical assistance with trained staff"),
        ("Prayer Area", "Dedicated space for prayers and meditation"),
        ("Lost & Found", "Central lost and found counter"),
        ("Photography Zone", "Professional photo booth with props"),
        ("Kids Play Area", "Safe play area for children"),
        ("VIP Lounges", "Exclusive lounges for premium ticket holders"),
    ]
    .into_iter()
    .map(|(name, description)| Facility {
        name: name.to_string(),
        description: description.to_string(),
        available: true,
    })
    .collect()
}

pub fn guidelines() -> Vec<Guideline> {
    [
        ("Dress Code", "Traditional Indian attire preferred but not mandatory"),
        ("Entry Time", "Gates open at 5:00 PM daily"),
        ("Age Restrictions", "Children under 5 enter free with adult supervision"),
        ("Photography", "Personal photography allowed, no professional equipment"),
        ("Food & Drinks", "Outside food not allowed, water bottles permitted"),
        ("Prohibited Items", "No alcohol, weapons, or dangerous items"),
    ]
    .into_iter()
    .map(|(title, description)| Guideline {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn ticket_records() -> Vec<TicketRecord> {
    vec![
        TicketRecord {
            id: "1".to_string(),
            booking_id: "GF2024-ABC123".to_string(),
            customer_name: "Rajesh Patel".to_string(),
            email: "rajesh@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            pass_type: "Premium 5-Day Pass".to_string(),
            quantity: 2,
            total_amount: 4998,
            booking_date: date(2024, 10, 10),
            status: TicketStatus::Confirmed,
            payment_status: PaymentStatus::Completed,
            entry_status: EntryStatus::Entered,
            qr_code: "QR123456".to_string(),
        },
        TicketRecord {
            id: "2".to_string(),
            booking_id: "GF2024-DEF456".to_string(),
            customer_name: "Priya Sharma".to_string(),
            email: "priya@email.com".to_string(),
            phone: "+91 98765 43211".to_string(),
            pass_type: "Family Pass".to_string(),
            quantity: 4,
            total_amount: 7999,
            booking_date: date(2024, 10, 12),
            status: TicketStatus::Confirmed,
            payment_status: PaymentStatus::Completed,
            entry_status: EntryStatus::NotEntered,
            qr_code: "QR789012".to_string(),
        },
        TicketRecord {
            id: "3".to_string(),
            booking_id: "GF2024-GHI789".to_string(),
            customer_name: "Amit Kumar".to_string(),
            email: "amit@email.com".to_string(),
            phone: "+91 98765 43212".to_string(),
            pass_type: "Single Day Pass".to_string(),
            quantity: 1,
            total_amount: 599,
            booking_date: date(2024, 10, 14),
            status: TicketStatus::Pending,
            payment_status: PaymentStatus::Pending,
            entry_status: EntryStatus::NotEntered,
            qr_code: "QR345678".to_string(),
        },
        TicketRecord {
            id: "4".to_string(),
            booking_id: "GF2024-JKL012".to_string(),
            customer_name: "Sneha Patel".to_string(),
            email: "sneha@email.com".to_string(),
            phone: "+91 98765 43213".to_string(),
            pass_type: "VIP Meet & Greet Package".to_string(),
            quantity: 1,
            total_amount: 4999,
            booking_date: date(2024, 10, 13),
            status: TicketStatus::Confirmed,
            payment_status: PaymentStatus::Completed,
            entry_status: EntryStatus::Entered,
            qr_code: "QR901234".to_string(),
        },
        TicketRecord {
            id: "5".to_string(),
            booking_id: "GF2024-MNO345".to_string(),
            customer_name: "Rohit Singh".to_string(),
            email: "rohit@email.com".to_string(),
            phone: "+91 98765 43214".to_string(),
            pass_type: "Single Day Pass".to_string(),
            quantity: 2,
            total_amount: 1198,
            booking_date: date(2024, 10, 14),
            status: TicketStatus::Refunded,
            payment_status: PaymentStatus::Completed,
            entry_status: EntryStatus::Exited,
            qr_code: "QR567890".to_string(),
        },
    ]
}

pub fn user_accounts() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "1".to_string(),
            name: "Rajesh Patel".to_string(),
            email: "rajesh@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            role: Role::Customer,
            status: AccountStatus::Active,
            registered: date(2024, 9, 15),
            last_login: datetime(2024, 10, 14, 18, 30),
            total_bookings: 3,
            total_spent: 12_500,
        },
        UserAccount {
            id: "2".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya@email.com".to_string(),
            phone: "+91 98765 43211".to_string(),
            role: Role::Customer,
            status: AccountStatus::Active,
            registered: date(2024, 10, 1),
            last_login: datetime(2024, 10, 14, 20, 15),
            total_bookings: 1,
            total_spent: 7999,
        },
        UserAccount {
            id: "3".to_string(),
            name: "Admin User".to_string(),
            email: "admin@garba.com".to_string(),
            phone: "+91 98765 43212".to_string(),
            role: Role::Admin,
            status: AccountStatus::Active,
            registered: date(2024, 8, 1),
            last_login: datetime(2024, 10, 14, 22, 0),
            total_bookings: 0,
            total_spent: 0,
        },
        UserAccount {
            id: "4".to_string(),
            name: "Sneha Patel".to_string(),
            email: "sneha@email.com".to_string(),
            phone: "+91 98765 43213".to_string(),
            role: Role::Staff,
            status: AccountStatus::Active,
            registered: date(2024, 8, 20),
            last_login: datetime(2024, 10, 14, 19, 45),
            total_bookings: 1,
            total_spent: 4999,
        },
        UserAccount {
            id: "5".to_string(),
            name: "Rohit Singh".to_string(),
            email: "rohit@email.com".to_string(),
            phone: "+91 98765 43214".to_string(),
            role: Role::Customer,
            status: AccountStatus::Banned,
            registered: date(2024, 9, 28),
            last_login: datetime(2024, 10, 13, 21, 10),
            total_bookings: 1,
            total_spent: 1198,
        },
        UserAccount {
            id: "6".to_string(),
            name: "Meera Desai".to_string(),
            email: "meera@garba.com".to_string(),
            phone: "+91 98765 43215".to_string(),
            role: Role::Manager,
            status: AccountStatus::Inactive,
            registered: date(2024, 8, 5),
            last_login: datetime(2024, 10, 9, 17, 25),
            total_bookings: 0,
            total_spent: 0,
        },
    ]
}

pub fn venue_zones() -> Vec<VenueZone> {
    vec![
        VenueZone {
            id: "main-stage".to_string(),
            name: "Main Stage Area".to_string(),
            capacity: 15_000,
            occupancy: 8234,
            facilities: vec!["Sound System".to_string(), "Lighting".to_string(), "Security".to_string()],
            updated: "2 minutes ago".to_string(),
        },
        VenueZone {
            id: "dance-floor".to_string(),
            name: "Dance Floor".to_string(),
            capacity: 20_000,
            occupancy: 12_456,
            facilities: vec!["Open Space".to_string(), "Lighting".to_string(), "First Aid".to_string()],
            updated: "1 minute ago".to_string(),
        },
        VenueZone {
            id: "food-court".to_string(),
            name: "Food Court".to_string(),
            capacity: 5000,
            occupancy: 3456,
            facilities: vec!["50 Stalls".to_string(), "Seating".to_string(), "Waste Management".to_string()],
            updated: "3 minutes ago".to_string(),
        },
        VenueZone {
            id: "parking-a".to_string(),
            name: "Parking Zone A".to_string(),
            capacity: 2000,
            occupancy: 1890,
            facilities: vec!["Car Parking".to_string(), "Security".to_string(), "CCTV".to_string()],
            updated: "1 minute ago".to_string(),
        },
        VenueZone {
            id: "parking-b".to_string(),
            name: "Parking Zone B".to_string(),
            capacity: 1500,
            occupancy: 1234,
            facilities: vec!["Car Parking".to_string(), "Security".to_string()],
            updated: "2 minutes ago".to_string(),
        },
        VenueZone {
            id: "vip-area".to_string(),
            name: "VIP Lounge".to_string(),
            capacity: 500,
            occupancy: 234,
            facilities: vec![
                "AC Lounge".to_string(),
                "Premium Seating".to_string(),
                "Dedicated Service".to_string(),
            ],
            updated: "1 minute ago".to_string(),
        },
    ]
}

pub fn facility_units() -> Vec<FacilityUnit> {
    vec![
        FacilityUnit {
            name: "Sound System - Main Stage".to_string(),
            status: FacilityStatus::Operational,
            last_check: "30 minutes ago".to_string(),
            next_maintenance: date(2024, 10, 16),
            technician: "Raj Kumar".to_string(),
        },
        FacilityUnit {
            name: "Lighting - Dance Floor".to_string(),
            status: FacilityStatus::Operational,
            last_check: "45 minutes ago".to_string(),
            next_maintenance: date(2024, 10, 17),
            technician: "Priya Sharma".to_string(),
        },
        FacilityUnit {
            name: "Generator - Backup Power".to_string(),
            status: FacilityStatus::Standby,
            last_check: "1 hour ago".to_string(),
            next_maintenance: date(2024, 10, 15),
            technician: "Amit Singh".to_string(),
        },
        FacilityUnit {
            name: "Water Supply - Food Court".to_string(),
            status: FacilityStatus::Maintenance,
            last_check: "2 hours ago".to_string(),
            next_maintenance: date(2024, 10, 15),
            technician: "Suresh Patel".to_string(),
        },
    ]
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    [
        ("Event Manager", "Rajesh Patel", "+91 98765 43210"),
        ("Security Head", "Amit Kumar", "+91 98765 43211"),
        ("Medical Officer", "Dr. Priya Sharma", "+91 98765 43212"),
        ("Technical Manager", "Suresh Singh", "+91 98765 43213"),
    ]
    .into_iter()
    .map(|(role, name, phone)| EmergencyContact {
        role: role.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
    })
    .collect()
}

pub fn gate_activity() -> Vec<GateActivity> {
    vec![
        GateActivity {
            gate: "Main Gate".to_string(),
            entries: 4567,
            exits: 234,
            current: 4333,
            capacity: 15_000,
        },
        GateActivity {
            gate: "North Gate".to_string(),
            entries: 3456,
            exits: 189,
            current: 3267,
            capacity: 12_000,
        },
        GateActivity {
            gate: "South Gate".to_string(),
            entries: 2890,
            exits: 156,
            current: 2734,
            capacity: 10_000,
        },
        GateActivity {
            gate: "VIP Entrance".to_string(),
            entries: 1543,
            exits: 67,
            current: 1476,
            capacity: 5000,
        },
    ]
}

pub fn hourly_flow() -> Vec<HourlyFlow> {
    [
        ("17:00", 234, 12),
        ("18:00", 567, 23),
        ("19:00", 890, 45),
        ("20:00", 1234, 67),
        ("21:00", 1567, 89),
        ("22:00", 1890, 123),
        ("23:00", 1456, 234),
    ]
    .into_iter()
    .map(|(hour, entries, exits)| HourlyFlow {
        hour: hour.to_string(),
        entries,
        exits,
    })
    .collect()
}

pub fn recent_entries() -> Vec<EntryEvent> {
    [
        ("Rajesh Patel", "GF2024-ABC123", "Main Gate", "22:45:32", EntryDirection::Entered),
        ("Priya Sharma", "GF2024-DEF456", "North Gate", "22:45:28", EntryDirection::Entered),
        ("Amit Kumar", "GF2024-GHI789", "South Gate", "22:45:15", EntryDirection::Entered),
        ("Sneha Patel", "GF2024-JKL012", "VIP Entrance", "22:45:10", EntryDirection::Entered),
        ("Rohit Singh", "GF2024-MNO345", "Main Gate", "22:44:58", EntryDirection::Exited),
    ]
    .into_iter()
    .map(|(attendee, ticket_id, gate, time, direction)| EntryEvent {
        attendee: attendee.to_string(),
        ticket_id: ticket_id.to_string(),
        gate: gate.to_string(),
        time: time.to_string(),
        direction,
    })
    .collect()
}

pub fn ops_alerts() -> Vec<OpsAlert> {
    vec![
        OpsAlert {
            message: "Main Gate approaching 90% capacity".to_string(),
            raised: "5 minutes ago".to_string(),
            severity: AlertSeverity::Warning,
        },
        OpsAlert {
            message: "Invalid QR code scan attempt at North Gate".to_string(),
            raised: "8 minutes ago".to_string(),
            severity: AlertSeverity::Error,
        },
        OpsAlert {
            message: "Scanner offline at South Gate - Gate 3".to_string(),
            raised: "12 minutes ago".to_string(),
            severity: AlertSeverity::Error,
        },
    ]
}

pub fn revenue_by_pass() -> Vec<RevenueSlice> {
    [
        ("Premium 5-Day Pass", 12_456_780_u64, 38.4_f32, 2489_u32),
        ("Family Pass", 8_934_560, 27.5, 1118),
        ("Individual Pass (Male)", 6_789_012, 20.9, 2716),
        ("Individual Pass (Female)", 3_456_789, 10.6, 1584),
        ("Single Day Pass", 865_439, 2.6, 1445),
    ]
    .into_iter()
    .map(|(label, revenue, percentage, bookings)| RevenueSlice {
        label: label.to_string(),
        revenue,
        percentage,
        bookings,
    })
    .collect()
}

pub fn daily_revenue() -> Vec<DailyRevenue> {
    [
        (8, 234_567_u64, 89_u32),
        (9, 345_678, 124),
        (10, 456_789, 167),
        (11, 567_890, 203),
        (12, 678_901, 245),
        (13, 789_012, 289),
        (14, 890_123, 334),
    ]
    .into_iter()
    .map(|(day, revenue, bookings)| DailyRevenue {
        date: date(2024, 10, day),
        revenue,
        bookings,
    })
    .collect()
}

pub fn payment_methods() -> Vec<PaymentMethodShare> {
    [
        ("UPI", 15_678_900_u64, 48.3_f32),
        ("Credit/Debit Card", 12_345_600, 38.0),
        ("Net Banking", 4_321_080, 13.3),
        ("Wallet", 135_000, 0.4),
    ]
    .into_iter()
    .map(|(method, revenue, percentage)| PaymentMethodShare {
        method: method.to_string(),
        revenue,
        percentage,
    })
    .collect()
}

/// Run of show for opening night, used by event management.
pub fn opening_night_schedule() -> Vec<ScheduleItem> {
    vec![
        ScheduleItem {
            time: "17:00".to_string(),
            duration_min: 30,
            title: "Gates Open & Registration".to_string(),
            kind: ScheduleKind::Logistics,
            expected_attendees: 0,
            venue_area: "All Gates".to_string(),
            host: None,
        },
        ScheduleItem {
            time: "17:30".to_string(),
            duration_min: 90,
            title: "Basic Garba Workshop".to_string(),
            kind: ScheduleKind::Workshop,
            expected_attendees: 150,
            venue_area: "Workshop Area".to_string(),
            host: Some("Meera Patel".to_string()),
        },
        ScheduleItem {
            time: "19:00".to_string(),
            duration_min: 60,
            title: "Opening Ceremony".to_string(),
            kind: ScheduleKind::Ceremony,
            expected_attendees: 5000,
            venue_area: "Main Stage".to_string(),
            host: None,
        },
        ScheduleItem {
            time: "21:00".to_string(),
            duration_min: 90,
            title: "Falguni Pathak Performance".to_string(),
            kind: ScheduleKind::Performance,
            expected_attendees: 8000,
            venue_area: "Main Stage".to_string(),
            host: Some("Falguni Pathak".to_string()),
        },
        ScheduleItem {
            time: "22:30".to_string(),
            duration_min: 120,
            title: "Community Garba".to_string(),
            kind: ScheduleKind::Community,
            expected_attendees: 10_000,
            venue_area: "Dance Floor".to_string(),
            host: None,
        },
        ScheduleItem {
            time: "23:30".to_string(),
            duration_min: 60,
            title: "Best Costume Competition".to_string(),
            kind: ScheduleKind::Competition,
            expected_attendees: 500,
            venue_area: "Competition Stage".to_string(),
            host: None,
        },
    ]
}

pub fn celebrity_bookings() -> Vec<CelebrityBooking> {
    vec![
        CelebrityBooking {
            name: "Falguni Pathak".to_string(),
            performance_date: date(2024, 10, 15),
            performance_time: "21:00".to_string(),
            status: LineupStatus::Confirmed,
            fee: 500_000,
            requirements: vec!["Sound system".to_string(), "Lighting setup".to_string(), "Green room".to_string()],
            contact: "+91 98765 43210".to_string(),
        },
        CelebrityBooking {
            name: "Kinjal Dave".to_string(),
            performance_date: date(2024, 10, 16),
            performance_time: "20:30".to_string(),
            status: LineupStatus::Confirmed,
            fee: 300_000,
            requirements: vec!["Sound system".to_string(), "Backup dancers space".to_string()],
            contact: "+91 98765 43211".to_string(),
        },
        CelebrityBooking {
            name: "Parthiv Gohil".to_string(),
            performance_date: date(2024, 10, 17),
            performance_time: "21:30".to_string(),
            status: LineupStatus::Pending,
            fee: 250_000,
            requirements: vec!["Piano".to_string(), "Sound system".to_string()],
            contact: "+91 98765 43212".to_string(),
        },
    ]
}

pub fn schedule_notes() -> Vec<ScheduleNote> {
    vec![
        ScheduleNote {
            name: "Celebrity Performance - Falguni Pathak".to_string(),
            time: "21:00".to_string(),
            upcoming: true,
        },
        ScheduleNote {
            name: "Dance Competition Finals".to_string(),
            time: "22:30".to_string(),
            upcoming: true,
        },
        ScheduleNote {
            name: "Food Court Extension Hours".to_string(),
            time: "23:00".to_string(),
            upcoming: false,
        },
    ]
}

pub fn payment_gateways() -> Vec<PaymentGateway> {
    vec![
        PaymentGateway {
            name: "Razorpay".to_string(),
            status: IntegrationStatus::Active,
            fee_label: "2.5%".to_string(),
            methods: vec![
                "Cards".to_string(),
                "UPI".to_string(),
                "Net Banking".to_string(),
                "Wallets".to_string(),
            ],
        },
        PaymentGateway {
            name: "PayU".to_string(),
            status: IntegrationStatus::Inactive,
            fee_label: "2.3%".to_string(),
            methods: vec!["Cards".to_string(), "UPI".to_string(), "Net Banking".to_string()],
        },
        PaymentGateway {
            name: "Stripe".to_string(),
            status: IntegrationStatus::Active,
            fee_label: "2.9%".to_string(),
            methods: vec!["Cards".to_string(), "Digital Wallets".to_string()],
        },
    ]
}

pub fn api_integrations() -> Vec<ApiIntegration> {
    vec![
        ApiIntegration {
            name: "SMS Gateway".to_string(),
            provider: "Twilio".to_string(),
            status: IntegrationStatus::Active,
            last_used: "2 minutes ago".to_string(),
        },
        ApiIntegration {
            name: "Email Service".to_string(),
            provider: "SendGrid".to_string(),
            status: IntegrationStatus::Active,
            last_used: "5 minutes ago".to_string(),
        },
        ApiIntegration {
            name: "Maps API".to_string(),
            provider: "Google Maps".to_string(),
            status: IntegrationStatus::Active,
            last_used: "1 hour ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_festival_days_reference_known_celebrities() {
        let roster = celebrities();
        for day in festival_days() {
            for id in &day.celebrity_ids {
                assert!(roster.iter().any(|c| &c.id == id), "unknown celebrity id {id}");
            }
        }
    }

    #[test]
    fn test_booking_ids_carry_festival_prefix() {
        for ticket in ticket_records() {
            assert!(ticket.booking_id.starts_with("GF2024-"), "bad id {}", ticket.booking_id);
        }
    }

    #[test]
    fn test_zone_occupancy_never_exceeds_capacity() {
        for zone in venue_zones() {
            assert!(zone.occupancy <= zone.capacity, "{} overbooked", zone.name);
        }
        for gate in gate_activity() {
            assert!(gate.current <= gate.capacity, "{} overbooked", gate.gate);
        }
    }

    #[test]
    fn test_pass_savings_positive_for_full_event() {
        for pass in pass_types() {
            assert!(pass.full_event_savings(5) > 0, "{} has no full-event discount", pass.name);
        }
    }

    #[test]
    fn test_seed_is_nonempty() {
        let data = DemoData::seed();
        assert_eq!(data.festival_days.len(), 5);
        assert_eq!(data.pass_types.len(), 4);
        assert!(!data.tickets.is_empty());
        assert!(!data.users.is_empty());
        assert!(!data.venue_zones.is_empty());
        assert!(!data.payment_gateways.is_empty());
        assert!(!data.integrations.is_empty());
    }

    #[test]
    fn test_at_least_one_gateway_is_live() {
        assert!(
            payment_gateways().iter().any(|g| g.status == IntegrationStatus::Active),
            "no active gateway to route payments through"
        );
    }
}
