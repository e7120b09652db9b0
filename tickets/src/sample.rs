//! Demo dataset loaded into every new session.

use time::macros::{date, datetime};

use crate::ticket::Ticket;

/// The three tickets shown on first load.
#[must_use]
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "TRK-240813-001".to_owned(),
            customer: "Ahmet Yılmaz".to_owned(),
            phone: "+90 532 123 45 67".to_owned(),
            brand: "Apple".to_owned(),
            model: "iPhone 13".to_owned(),
            serial: "SNX13-9931A".to_owned(),
            issue: "Ekran kırık, batarya çabuk bitiyor".to_owned(),
            status: "tamir".to_owned(),
            assigned: "Ece".to_owned(),
            eta: date!(2025-08-15),
            created_at: datetime!(2025-08-12 10:24),
            cost: 6200,
        },
        Ticket {
            id: "TRK-240813-002".to_owned(),
            customer: "Mehmet Demir".to_owned(),
            phone: "+90 534 987 65 43".to_owned(),
            brand: "Samsung".to_owned(),
            model: "S22".to_owned(),
            serial: "SMS22-77XY".to_owned(),
            issue: "Şarj soketi arızalı".to_owned(),
            status: "parca".to_owned(),
            assigned: "Mert".to_owned(),
            eta: date!(2025-08-16),
            created_at: datetime!(2025-08-13 09:11),
            cost: 1800,
        },
        Ticket {
            id: "TRK-240812-008".to_owned(),
            customer: "Elif Kaya".to_owned(),
            phone: "+90 555 111 22 33".to_owned(),
            brand: "Xiaomi".to_owned(),
            model: "Redmi Note 10".to_owned(),
            serial: "XM-101010".to_owned(),
            issue: "Su teması sonrası açılmıyor".to_owned(),
            status: "test".to_owned(),
            assigned: "Burak".to_owned(),
            eta: date!(2025-08-14),
            created_at: datetime!(2025-08-12 13:42),
            cost: 3500,
        },
    ]
}
