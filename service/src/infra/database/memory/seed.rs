//! Demo dataset a [`Memory`] store can be pre-populated with.
//!
//! [`Memory`]: super::Memory
#![expect(unsafe_code, reason = "literals below are pre-validated")]
#![expect(clippy::too_many_lines, reason = "plain data")]

use common::{Date, DateRange, DateTime, Money};
use rust_decimal::Decimal;

use crate::domain::{
    expense, maintenance, payment, property, reservation, user, Expense,
    MaintenanceOrder, Payment, Property, Reservation, User,
};

use super::{table_of, State};

/// Builds the initial [`State`] of a seeded [`Memory`] store.
///
/// [`Memory`]: super::Memory
pub(super) fn state() -> State {
    State {
        users: table_of(users(), 16),
        properties: table_of(properties(), 466),
        reservations: table_of(reservations(), 13),
        payments: table_of(payments(), 11),
        maintenance: table_of(maintenance_orders(), 468),
        expenses: table_of(expenses(), 14),
    }
}

fn date(s: &str) -> Date {
    s.parse().expect("valid seed date")
}

fn range(start: &str, end: &str) -> DateRange {
    // SAFETY: every seeded period below has `start < end`.
    unsafe { DateRange::new_unchecked(date(start), date(end)) }
}

fn mxn(amount: i64) -> Money {
    Money::mxn(Decimal::from(amount))
}

fn user_name(s: &str) -> user::Name {
    // SAFETY: seeded names are non-empty and trimmed.
    unsafe { user::Name::new_unchecked(s) }
}

fn email(s: &str) -> user::Email {
    // SAFETY: seeded addresses match the e-mail format.
    unsafe { user::Email::new_unchecked(s) }
}

fn phone(s: &str) -> Option<user::Phone> {
    // SAFETY: seeded numbers match the phone format.
    Some(unsafe { user::Phone::new_unchecked(s) })
}

fn bank(bank: &str, clabe: &str, holder: &str) -> Option<user::BankAccount> {
    Some(user::BankAccount {
        bank: user_name(bank),
        // SAFETY: seeded CLABEs are 18 digits long.
        clabe: unsafe { user::Clabe::new_unchecked(clabe) },
        holder: user_name(holder),
    })
}

fn guest(
    id: i64,
    name: &str,
    mail: &str,
    tel: &str,
    registered: &str,
) -> User {
    User {
        id: id.into(),
        name: user_name(name),
        email: email(mail),
        phone: phone(tel),
        role: user::Role::Guest,
        bank_account: None,
        registered_on: date(registered).coerce(),
    }
}

fn prop_name(s: &str) -> property::Name {
    // SAFETY: seeded names are non-empty and trimmed.
    unsafe { property::Name::new_unchecked(s) }
}

fn address(street: &str, zone: &str) -> property::Address {
    property::Address {
        street: street.into(),
        zone: zone.into(),
        city: "Ciudad de México".into(),
        state: "CDMX".into(),
        country: "México".into(),
    }
}

fn notes(s: &str) -> Option<reservation::Notes> {
    // SAFETY: seeded notes are non-empty.
    Some(unsafe { reservation::Notes::new_unchecked(s) })
}

fn booked_at(s: &str) -> reservation::CreationDateTime {
    DateTime::from_rfc3339(s).expect("valid seed datetime").coerce()
}

fn work(s: &str) -> maintenance::Description {
    // SAFETY: seeded descriptions are non-empty.
    unsafe { maintenance::Description::new_unchecked(s) }
}

fn billed(s: &str) -> expense::Description {
    // SAFETY: seeded descriptions are non-empty.
    unsafe { expense::Description::new_unchecked(s) }
}

fn provider(s: &str) -> expense::Provider {
    // SAFETY: seeded providers are non-empty and trimmed.
    unsafe { expense::Provider::new_unchecked(s) }
}

fn users() -> Vec<User> {
    vec![
        guest(1, "Mariana López García", "mariana.lopez@gmail.com",
              "5543216789", "2024-01-15"),
        User {
            id: 2.into(),
            name: user_name("Carlos Méndez Torres"),
            email: email("carlos.mendez@outlook.com"),
            phone: phone("5532198745"),
            role: user::Role::Host,
            bank_account: bank(
                "BBVA", "012180015543219876", "Carlos Méndez Torres",
            ),
            registered_on: date("2024-01-20").coerce(),
        },
        guest(3, "Andrea Ruiz Pineda", "andrea.ruizp@hotmail.com",
              "5587459632", "2024-02-01"),
        User {
            id: 4.into(),
            name: user_name("Jorge Ramírez Ortega"),
            email: email("jorge.ramirez@gmail.com"),
            phone: phone("5512369874"),
            role: user::Role::Host,
            bank_account: bank(
                "Santander", "014180551236987412", "Jorge Ramírez Ortega",
            ),
            registered_on: date("2024-02-10").coerce(),
        },
        guest(5, "Sofía Hernández León", "sofia.hl@gmail.com",
              "5521478963", "2024-02-15"),
        User {
            id: 6.into(),
            name: user_name("Pablo Rojas Serrano"),
            email: email("pablorojas@live.com"),
            phone: phone("5589624713"),
            role: user::Role::Host,
            bank_account: bank(
                "Banorte", "072180558962471355", "Pablo Rojas Serrano",
            ),
            registered_on: date("2024-03-01").coerce(),
        },
        guest(7, "Fernanda Díaz Campos", "fernanda.diaz@yahoo.com",
              "5574136982", "2024-03-05"),
        guest(8, "Luis Aguilar Morales", "luis.aguilar@gmail.com",
              "5569874123", "2024-03-12"),
        User {
            id: 9.into(),
            name: user_name("Claudia Torres Jiménez"),
            email: email("claudia.torres@icloud.com"),
            phone: phone("5598741236"),
            role: user::Role::Host,
            bank_account: bank(
                "HSBC", "021180559874123699", "Claudia Torres Jiménez",
            ),
            registered_on: date("2024-03-20").coerce(),
        },
        guest(10, "Ricardo Vega Castillo", "ricardo.vega@gmail.com",
              "5528741935", "2024-04-01"),
        guest(11, "Diego Navarro Salas", "diego.navarro@gmail.com",
              "5519824376", "2024-04-10"),
        User {
            id: 12.into(),
            name: user_name("Ricardo Torres Palma"),
            email: email("ricardo.torres@airbnbhost.com"),
            phone: phone("5527914683"),
            role: user::Role::Host,
            bank_account: bank(
                "Citibanamex", "002180552791468300", "Ricardo Torres Palma",
            ),
            registered_on: date("2024-04-15").coerce(),
        },
        guest(13, "Valeria Campos Rojas", "valeriacampos@outlook.com",
              "5574219863", "2024-04-20"),
        guest(14, "Mauricio Chávez Luna", "mauricio.chavez@yahoo.com",
              "5598412765", "2024-05-01"),
        guest(15, "Karla Jiménez Soto", "karla.jimenez@icloud.com",
              "5583129647", "2024-05-10"),
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 456.into(),
            name: prop_name("Casa Colonial San Ángel"),
            kind: property::Kind::House,
            address: address("Calle Amargura 32, San Ángel", "San Ángel"),
            capacity: 6,
            num_rooms: 3,
            num_baths: 2,
            area_m2: Some(120),
            amenities: property::Amenities {
                pool: false,
                parking: true,
                wifi: true,
                air_conditioning: true,
                pets_allowed: true,
            },
            nightly_rate: mxn(2800),
            host_id: 2.into(),
            status: property::Status::Available,
        },
        Property {
            id: 457.into(),
            name: prop_name("Loft Moderno Polanco"),
            kind: property::Kind::Apartment,
            address: address("Av. Masaryk 145, Polanco", "Polanco"),
            capacity: 4,
            num_rooms: 2,
            num_baths: 2,
            area_m2: Some(85),
            amenities: property::Amenities {
                pool: true,
                parking: true,
                wifi: true,
                air_conditioning: true,
                pets_allowed: false,
            },
            nightly_rate: mxn(3200),
            host_id: 4.into(),
            status: property::Status::Available,
        },
        Property {
            id: 458.into(),
            name: prop_name("Departamento Roma Norte"),
            kind: property::Kind::Apartment,
            address: address("Calle Orizaba 67, Roma Norte", "Roma Norte"),
            capacity: 3,
            num_rooms: 2,
            num_baths: 1,
            area_m2: Some(65),
            amenities: property::Amenities {
                pool: false,
                parking: false,
                wifi: true,
                air_conditioning: true,
                pets_allowed: true,
            },
            nightly_rate: mxn(1800),
            host_id: 6.into(),
            status: property::Status::Available,
        },
        Property {
            id: 459.into(),
            name: prop_name("Casa Coyoacán con Jardín"),
            kind: property::Kind::House,
            address: address("Av. Francisco Sosa 234, Coyoacán", "Coyoacán"),
            capacity: 8,
            num_rooms: 4,
            num_baths: 3,
            area_m2: Some(180),
            amenities: property::Amenities {
                pool: false,
                parking: true,
                wifi: true,
                air_conditioning: false,
                pets_allowed: true,
            },
            nightly_rate: mxn(4000),
            host_id: 9.into(),
            status: property::Status::Available,
        },
        Property {
            id: 460.into(),
            name: prop_name("Studio Condesa"),
            kind: property::Kind::Studio,
            address: address("Calle Amsterdam 78, Condesa", "Condesa"),
            capacity: 2,
            num_rooms: 1,
            num_baths: 1,
            area_m2: Some(45),
            amenities: property::Amenities {
                pool: false,
                parking: false,
                wifi: true,
                air_conditioning: true,
                pets_allowed: false,
            },
            nightly_rate: mxn(1400),
            host_id: 12.into(),
            status: property::Status::Available,
        },
        Property {
            id: 461.into(),
            name: prop_name("Penthouse Santa Fe"),
            kind: property::Kind::Penthouse,
            address: address(
                "Av. Vasco de Quiroga 3800, Santa Fe", "Santa Fe",
            ),
            capacity: 6,
            num_rooms: 3,
            num_baths: 3,
            area_m2: Some(200),
            amenities: property::Amenities {
                pool: true,
                parking: true,
                wifi: true,
                air_conditioning: true,
                pets_allowed: false,
            },
            nightly_rate: mxn(5000),
            host_id: 2.into(),
            status: property::Status::Available,
        },
        Property {
            id: 462.into(),
            name: prop_name("Casa Tradicional Xochimilco"),
            kind: property::Kind::House,
            address: address("Calle Violeta 12, Xochimilco", "Xochimilco"),
            capacity: 10,
            num_rooms: 5,
            num_baths: 3,
            area_m2: Some(150),
            amenities: property::Amenities {
                pool: false,
                parking: true,
                wifi: true,
                air_conditioning: false,
                pets_allowed: true,
            },
            nightly_rate: mxn(3000),
            host_id: 4.into(),
            status: property::Status::Available,
        },
        Property {
            id: 463.into(),
            name: prop_name("Loft Industrial Del Valle"),
            kind: property::Kind::Loft,
            address: address("Insurgentes Sur 1234, Del Valle", "Del Valle"),
            capacity: 4,
            num_rooms: 2,
            num_baths: 2,
            area_m2: Some(90),
            amenities: property::Amenities {
                pool: false,
                parking: true,
                wifi: true,
                air_conditioning: true,
                pets_allowed: false,
            },
            nightly_rate: mxn(2200),
            host_id: 6.into(),
            status: property::Status::Available,
        },
        Property {
            id: 464.into(),
            name: prop_name("Departamento Ejecutivo Reforma"),
            kind: property::Kind::Apartment,
            address: address("Paseo de la Reforma 456", "Reforma"),
            capacity: 3,
            num_rooms: 2,
            num_baths: 2,
            area_m2: Some(75),
            amenities: property::Amenities {
                pool: true,
                parking: true,
                wifi: true,
                air_conditioning: true,
                pets_allowed: false,
            },
            nightly_rate: mxn(2600),
            host_id: 9.into(),
            status: property::Status::Available,
        },
        Property {
            id: 465.into(),
            name: prop_name("Casa Familiar Narvarte"),
            kind: property::Kind::House,
            address: address("Eje 5 Sur 789, Narvarte", "Narvarte"),
            capacity: 7,
            num_rooms: 4,
            num_baths: 2,
            area_m2: Some(140),
            amenities: property::Amenities {
                pool: false,
                parking: true,
                wifi: true,
                air_conditioning: true,
                pets_allowed: true,
            },
            nightly_rate: mxn(2500),
            host_id: 12.into(),
            status: property::Status::Available,
        },
    ]
}

fn reservations() -> Vec<Reservation> {
    let confirmed = |id: i64,
                     guest_id: i64,
                     property_id: i64,
                     period: DateRange,
                     rate: i64,
                     total: i64,
                     note: &str| Reservation {
        id: id.into(),
        guest_id: guest_id.into(),
        property_id: property_id.into(),
        period,
        nightly_rate: mxn(rate),
        total: mxn(total),
        status: reservation::Status::Confirmed,
        created_at: booked_at(&format!("{}T12:00:00Z", period.start())),
        notes: notes(note),
    };

    let mut rows = vec![
        confirmed(1, 1, 456, range("2025-11-25", "2025-11-30"), 2800, 14000,
                  "Huésped muy puntual, sin incidentes"),
        confirmed(2, 3, 457, range("2025-11-26", "2025-12-03"), 3200, 22400,
                  "Solicitud de check-in temprano aprobada"),
        confirmed(3, 5, 459, range("2025-12-05", "2025-12-15"), 4000, 40000,
                  "Reservación para evento familiar"),
        confirmed(5, 8, 458, range("2025-10-25", "2025-10-29"), 1800, 7200,
                  "Viaje de negocios"),
        confirmed(6, 10, 461, range("2025-12-20", "2025-12-30"), 5000, 50000,
                  "Cliente VIP, excelente experiencia"),
        confirmed(7, 11, 456, range("2025-11-28", "2025-12-02"), 2800, 11200,
                  "Primera reserva del usuario"),
        confirmed(8, 13, 462, range("2026-01-10", "2026-01-20"), 3000, 30000,
                  "Reserva grupal para retiro espiritual"),
        confirmed(9, 14, 463, range("2025-10-02", "2025-10-05"), 2200, 6600,
                  "Cliente frecuente"),
        confirmed(10, 15, 464, range("2025-11-29", "2025-12-05"), 2600, 15600,
                  "Reserva activa próxima"),
        confirmed(12, 5, 457, range("2024-12-01", "2024-12-10"), 3200, 28800,
                  "Estancia larga vacacional"),
    ];
    rows.push(Reservation {
        id: 4.into(),
        guest_id: 7.into(),
        property_id: 460.into(),
        period: range("2025-03-15", "2025-03-16"),
        nightly_rate: mxn(1400),
        total: mxn(0),
        status: reservation::Status::Cancelled,
        created_at: booked_at("2025-03-15T12:00:00Z"),
        notes: notes("Cancelada por el huésped"),
    });
    rows.push(Reservation {
        id: 11.into(),
        guest_id: 3.into(),
        property_id: 465.into(),
        period: range("2025-05-10", "2025-05-15"),
        nightly_rate: mxn(2500),
        total: mxn(0),
        status: reservation::Status::Cancelled,
        created_at: booked_at("2025-05-10T12:00:00Z"),
        notes: notes("Cancelación por fuerza mayor"),
    });
    rows.sort_by_key(|r| i64::from(r.id));
    rows
}

fn payments() -> Vec<Payment> {
    let payment = |id: i64,
                   reservation_id: i64,
                   paid_on: &str,
                   gross: i64,
                   commission: i64,
                   method: payment::Method,
                   disbursed_on: Option<&str>| Payment {
        id: id.into(),
        reservation_id: reservation_id.into(),
        paid_on: date(paid_on).coerce(),
        gross: mxn(gross),
        commission: mxn(commission),
        net: mxn(gross - commission),
        method,
        status: payment::Status::Paid,
        disbursed_on: disbursed_on.map(|d| date(d).coerce()),
    };

    let mut rows = vec![
        payment(1, 1, "2025-11-25", 14000, 2800, payment::Method::Card,
                Some("2025-11-26")),
        payment(2, 2, "2025-11-26", 22400, 4480, payment::Method::Transfer,
                None),
        payment(3, 3, "2025-10-15", 40000, 8000, payment::Method::Card,
                Some("2025-10-16")),
        payment(5, 5, "2025-10-25", 7200, 1440, payment::Method::Cash, None),
        payment(6, 6, "2025-09-10", 50000, 10000, payment::Method::Card,
                Some("2025-09-11")),
        payment(7, 7, "2025-11-28", 11200, 2240, payment::Method::Transfer,
                None),
        payment(8, 8, "2025-08-15", 30000, 6000, payment::Method::Card, None),
        payment(9, 9, "2025-07-20", 6600, 1320, payment::Method::Cash,
                Some("2025-07-21")),
        payment(10, 10, "2025-11-29", 15600, 3120, payment::Method::Transfer,
                None),
    ];
    rows.push(Payment {
        id: 4.into(),
        reservation_id: 4.into(),
        paid_on: date("2025-03-16").coerce(),
        gross: mxn(0),
        commission: mxn(0),
        net: mxn(0),
        method: payment::Method::Transfer,
        status: payment::Status::Refunded,
        disbursed_on: None,
    });
    rows.sort_by_key(|p| i64::from(p.id));
    rows
}

fn maintenance_orders() -> Vec<MaintenanceOrder> {
    use maintenance::{Kind, Status};

    let order = |id: i64,
                 property_id: i64,
                 kind: maintenance::Kind,
                 description: &str,
                 scheduled_on: &str,
                 base_cost: i64,
                 total: i64,
                 status: maintenance::Status| MaintenanceOrder {
        id: id.into(),
        property_id: property_id.into(),
        kind,
        description: work(description),
        scheduled_on: date(scheduled_on).coerce(),
        base_cost: mxn(base_cost),
        total: mxn(total),
        status,
    };

    vec![
        order(456, 456, Kind::Cleaning,
              "Limpieza completa tras salida de huéspedes, cambio de sábanas",
              "2025-02-14", 650, 850, Status::Completed),
        order(457, 457, Kind::Corrective,
              "Reparación de fuga en lavabo del baño principal",
              "2025-02-25", 450, 600, Status::Completed),
        order(458, 459, Kind::Preventive,
              "Retocar muros exteriores dañados por la humedad",
              "2025-03-10", 950, 1200, Status::InProgress),
        order(459, 460, Kind::Corrective,
              "Sustitución de focos LED y revisión de cableado del pasillo",
              "2025-03-18", 350, 500, Status::Completed),
        order(460, 458, Kind::Cleaning,
              "Limpieza y cambio de blancos tras estadía prolongada",
              "2025-03-29", 550, 700, Status::Completed),
        order(461, 461, Kind::Preventive,
              "Reemplazo de sofá dañado y revisión de sillas del comedor",
              "2025-04-05", 2800, 3500, Status::Completed),
        order(462, 462, Kind::Preventive,
              "Limpieza de filtros y recarga de gas refrigerante",
              "2025-04-12", 800, 1100, Status::InProgress),
        order(463, 456, Kind::Corrective,
              "Ajuste de puertas de clóset y reparación de cajones",
              "2025-04-20", 1000, 1400, Status::Completed),
        order(464, 462, Kind::Preventive,
              "Fumigación preventiva contra insectos",
              "2025-04-28", 700, 950, Status::Completed),
        order(465, 463, Kind::Cleaning,
              "Limpieza profunda post-evento y sanitización completa",
              "2025-05-06", 900, 1200, Status::Completed),
        order(466, 456, Kind::Cleaning, "Limpieza express check-out",
              "2025-11-28", 400, 550, Status::Completed),
        order(467, 458, Kind::Corrective, "Reparación chapa puerta principal",
              "2025-11-15", 600, 800, Status::Completed),
    ]
}

fn expenses() -> Vec<Expense> {
    use expense::Category;

    let expense = |id: i64,
                   property_id: Option<i64>,
                   incurred_on: &str,
                   category: expense::Category,
                   description: &str,
                   by: &str,
                   base: i64,
                   tax: i64| Expense {
        id: id.into(),
        category,
        property_id: property_id.map(Into::into),
        provider: provider(by),
        description: billed(description),
        incurred_on: date(incurred_on).coerce(),
        base: mxn(base),
        tax: mxn(tax),
        total: mxn(base + tax),
        status: expense::Status::Paid,
    };

    vec![
        expense(1, None, "2025-01-15", Category::Software,
                "Suscripción mensual Airbnb Plus para anfitriones", "Airbnb",
                150, 24),
        expense(2, Some(456), "2025-01-03", Category::PropertyUpkeep,
                "Reparaciones menores oficina", "Servicios Múltiples SA",
                500, 0),
        expense(3, None, "2025-02-10", Category::Marketing,
                "Campaña publicitaria Facebook/Instagram Ads", "Meta",
                1500, 240),
        expense(4, None, "2025-02-20", Category::Infrastructure,
                "Hosting web y almacenamiento en la nube", "AWS", 200, 32),
        expense(5, None, "2025-03-05", Category::Staff,
                "Honorarios Asistente Virtual", "Freelancer", 3000, 0),
        expense(6, None, "2025-03-15", Category::PaymentFees,
                "Comisiones Stripe/PayPal por transacciones", "Stripe",
                450, 0),
        expense(7, None, "2025-04-01", Category::Legal,
                "Asesoría contable mensual", "Despacho Contable", 1200, 192),
        expense(10, None, "2025-05-02", Category::Other,
                "Seguros de propiedad contra daños", "Seguros Monterrey",
                3200, 512),
        expense(11, None, "2025-11-28", Category::Marketing,
                "Campaña Black Friday Redes Sociales", "Meta Ads", 2500, 400),
        expense(12, None, "2025-11-15", Category::Software,
                "Renovación Licencia CRM", "Salesforce", 1200, 192),
        expense(13, None, "2025-11-05", Category::Operations,
                "Suministros de oficina y limpieza", "Office Depot", 850, 136),
    ]
}
