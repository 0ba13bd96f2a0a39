//! Sample reference data the storefront ships with.

use super::models::*;

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: &str,
    name: &str,
    composition: &str,
    price: f64,
    availability: &str,
    medicine_type: MedicineType,
    description: &str,
    usage: &str,
    side_effects: &[&str],
    manufacturer: &str,
    popularity_score: u32,
) -> Medicine {
    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        composition: composition.to_string(),
        price,
        availability: availability.to_string(),
        medicine_type,
        description: Some(description.to_string()),
        usage: Some(usage.to_string()),
        side_effects: side_effects.iter().map(|s| s.to_string()).collect(),
        manufacturer: Some(manufacturer.to_string()),
        popularity_score: Some(popularity_score),
    }
}

pub fn sample_medicines() -> Vec<Medicine> {
    use MedicineType::*;
    vec![
        medicine(
            "dolo650",
            "DOLO 650",
            "Paracetamol 650mg",
            30.0,
            "In Stock",
            Tablet,
            "Used for temporary relief of fever and minor aches and pains.",
            "Take 1 tablet every 4-6 hours as needed for pain or fever.",
            &["Nausea", "Stomach pain", "Loss of appetite"],
            "Micro Labs Ltd",
            95,
        ),
        medicine(
            "crocin500",
            "Crocin 500",
            "Paracetamol 500mg",
            22.0,
            "In Stock",
            Tablet,
            "Used to reduce fever and relieve mild to moderate pain.",
            "Take 1-2 tablets every 4-6 hours as needed.",
            &["Allergic reactions", "Skin rash", "Hepatotoxicity with overdose"],
            "GSK Pharmaceuticals",
            92,
        ),
        medicine(
            "azithral500",
            "Azithral 500",
            "Azithromycin 500mg",
            125.0,
            "In Stock",
            Tablet,
            "An antibiotic used to treat various bacterial infections.",
            "Take 1 tablet daily for 3-5 days as prescribed.",
            &["Diarrhea", "Stomach pain", "Nausea"],
            "Alembic Pharmaceuticals",
            75,
        ),
        medicine(
            "calpol500",
            "Calpol 500",
            "Paracetamol 500mg",
            25.0,
            "In Stock",
            Tablet,
            "Used for relieving pain and reducing fever.",
            "Take 1-2 tablets every 4-6 hours, maximum 4 doses in 24 hours.",
            &["Nausea", "Rash", "Liver damage (with overdose)"],
            "GSK Pharmaceuticals",
            85,
        ),
        medicine(
            "paracip650",
            "Paracip 650",
            "Paracetamol 650mg",
            35.0,
            "Limited Stock",
            Tablet,
            "Used for fever reduction and pain relief.",
            "Take 1 tablet every 6 hours, not exceeding 4 tablets in 24 hours.",
            &["Allergic reaction", "Dizziness", "Abdominal pain"],
            "Cipla Ltd",
            80,
        ),
        medicine(
            "benadryl",
            "Benadryl Cough Syrup",
            "Diphenhydramine, Ammonium Chloride",
            85.0,
            "In Stock",
            Syrup,
            "Used for the temporary relief of cough and cold symptoms.",
            "Take 10ml three times a day.",
            &["Drowsiness", "Dry mouth", "Blurred vision"],
            "Johnson & Johnson",
            78,
        ),
        medicine(
            "allegra120",
            "Allegra 120mg",
            "Fexofenadine 120mg",
            110.0,
            "In Stock",
            Tablet,
            "Used to relieve symptoms of seasonal allergies.",
            "Take 1 tablet daily as needed for allergy symptoms.",
            &["Headache", "Nausea", "Dizziness"],
            "Sanofi India Ltd",
            72,
        ),
        medicine(
            "cetrizine10",
            "Cetrizine 10mg",
            "Cetirizine Hydrochloride 10mg",
            35.0,
            "In Stock",
            Tablet,
            "Used to treat allergy symptoms such as sneezing, itching, and runny nose.",
            "Take 1 tablet daily, preferably at night.",
            &["Drowsiness", "Dry mouth", "Fatigue"],
            "Cipla Ltd",
            88,
        ),
        medicine(
            "combiflam",
            "Combiflam",
            "Ibuprofen 400mg, Paracetamol 325mg",
            42.0,
            "In Stock",
            Tablet,
            "Used for relief of pain and inflammation.",
            "Take 1 tablet every 8 hours after meals.",
            &["Stomach upset", "Heartburn", "Dizziness"],
            "Sanofi India Ltd",
            90,
        ),
        medicine(
            "pantop40",
            "Pantop 40",
            "Pantoprazole 40mg",
            120.0,
            "In Stock",
            Tablet,
            "Used to reduce stomach acid production in conditions such as gastric ulcers.",
            "Take 1 tablet daily before breakfast.",
            &["Headache", "Diarrhea", "Stomach pain"],
            "Alkem Laboratories",
            65,
        ),
        medicine(
            "telma40",
            "Telma 40",
            "Telmisartan 40mg",
            95.0,
            "In Stock",
            Tablet,
            "Used to treat high blood pressure and heart failure.",
            "Take 1 tablet daily as prescribed.",
            &["Dizziness", "Back pain", "Sinusitis"],
            "Glenmark Pharmaceuticals",
            70,
        ),
        medicine(
            "montair10",
            "Montair 10",
            "Montelukast 10mg",
            165.0,
            "In Stock",
            Tablet,
            "Used to prevent and treat asthma and allergic rhinitis.",
            "Take 1 tablet daily in the evening.",
            &["Headache", "Upper respiratory infection", "Fever"],
            "Cipla Ltd",
            62,
        ),
    ]
}

fn pharmacy(
    id: &str,
    name: &str,
    location: &str,
    distance_km: f64,
    price: f64,
    pharmacy_type: PharmacyType,
) -> Pharmacy {
    Pharmacy {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        distance_km,
        price,
        pharmacy_type,
        opening_hours: "8:00 AM - 10:00 PM".to_string(),
        phone: "+91 98765 43210".to_string(),
        stock: vec!["dolo650".to_string(), "calpol500".to_string()],
    }
}

pub fn sample_pharmacies() -> Vec<Pharmacy> {
    use PharmacyType::*;
    vec![
        pharmacy("1", "Prakash Medicals", "BTM Layout, Bangalore", 0.9, 30.0, Generic),
        pharmacy("2", "Kamat Medicals", "JP Nagar, Bangalore", 1.6, 36.0, Generic),
        pharmacy("3", "Apollo Pharmacy", "Jayanagar, Bangalore", 2.0, 40.0, Chain),
        pharmacy("4", "Jana Aushadhi Kendra", "Koramangala, Bangalore", 2.4, 20.0, Government),
        pharmacy("5", "MedPlus Pharmacy", "HSR Layout, Bangalore", 3.1, 38.0, Chain),
        pharmacy("6", "People's Pharmacy", "Indiranagar, Bangalore", 4.5, 32.0, Generic),
        pharmacy("7", "Government Dispensary", "Shivaji Nagar, Bangalore", 5.2, 15.0, Government),
    ]
}

fn physician(
    id: u32,
    name: &str,
    specialty: &str,
    experience_years: u32,
    availability: &str,
    rating: f32,
) -> Physician {
    Physician {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience_years,
        availability: availability.to_string(),
        rating,
    }
}

pub fn sample_physicians() -> Vec<Physician> {
    vec![
        physician(1, "Dr. Neha Sharma", "General Physician", 12, "Mon-Sat, 10AM-1PM", 4.8),
        physician(2, "Dr. Rajesh Kumar", "Cardiologist", 15, "Tue-Fri, 6PM-9PM", 4.9),
        physician(3, "Dr. Priya Patel", "Pediatrician", 10, "Mon-Wed-Fri, 3PM-8PM", 4.7),
        physician(4, "Dr. Amit Singh", "Neurologist", 18, "Thu-Sat, 11AM-5PM", 4.9),
    ]
}

/// Bookable consultation slots, in display order.
pub const TIME_SLOTS: [&str; 12] = [
    "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "4:00 PM", "4:30 PM",
    "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM",
];

fn plan(
    name: &str,
    monthly_price: u32,
    description: &str,
    features: &[(bool, &str)],
    recommended: bool,
) -> SubscriptionPlan {
    SubscriptionPlan {
        name: name.to_string(),
        monthly_price,
        description: description.to_string(),
        features: features
            .iter()
            .map(|(included, text)| PlanFeature {
                included: *included,
                text: text.to_string(),
            })
            .collect(),
        recommended,
    }
}

pub fn sample_plans() -> Vec<SubscriptionPlan> {
    vec![
        plan(
            "Basic",
            0,
            "Essential features for everyone",
            &[
                (true, "Medicine search and comparison"),
                (true, "Find nearby pharmacies"),
                (true, "Basic medication reminders"),
                (false, "Home delivery priority"),
                (false, "24/7 pharmacist consultation"),
                (false, "Exclusive discounts"),
            ],
            false,
        ),
        plan(
            "Premium",
            199,
            "Enhanced features for better healthcare",
            &[
                (true, "All Basic plan features"),
                (true, "Free home delivery"),
                (true, "Priority customer support"),
                (true, "10% discount on all medicines"),
                (true, "Family account (up to 4 members)"),
                (false, "24/7 doctor consultation"),
            ],
            true,
        ),
        plan(
            "Family",
            499,
            "Complete coverage for the whole family",
            &[
                (true, "All Premium plan features"),
                (true, "Family account (up to 6 members)"),
                (true, "24/7 doctor consultation"),
                (true, "Health records management"),
                (true, "15% discount on all medicines"),
                (true, "Seasonal health checkup (bi-annual)"),
            ],
            false,
        ),
    ]
}
