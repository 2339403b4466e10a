//! Option lists for both flows
//!
//! Keys are what answers files and step rules use; labels are what the user
//! sees and what ends up in summaries and mail bodies.

use crate::choice_enum;

choice_enum! {
    pub enum YesNo {
        Yes => ("yes", "Yes"),
        No => ("no", "No"),
    }
}

// Relocation

choice_enum! {
    pub enum Household {
        Single => ("single", "Single"),
        Couple => ("couple", "Couple"),
        Family => ("family", "Family"),
    }
}

choice_enum! {
    pub enum MoveWindow {
        WithinMonth => ("within-month", "Within a month"),
        OneToThreeMonths => ("1-3-months", "1-3 months"),
        ThreeToSixMonths => ("3-6-months", "3-6 months"),
        Exploring => ("exploring", "Just exploring"),
    }
}

choice_enum! {
    pub enum AreaKnown {
        Known => ("known", "Known"),
        NotSure => ("not-sure", "Not sure"),
    }
}

choice_enum! {
    pub enum Area {
        DubaiMarina => ("dubai-marina", "Dubai Marina"),
        Downtown => ("downtown", "Downtown Dubai"),
        PalmJumeirah => ("palm-jumeirah", "Palm Jumeirah"),
        Jlt => ("jlt", "JLT"),
        BusinessBay => ("business-bay", "Business Bay"),
        DubaiHills => ("dubai-hills", "Dubai Hills Estate"),
        ArabianRanches => ("arabian-ranches", "Arabian Ranches"),
        Jvc => ("jvc", "JVC"),
    }
}

choice_enum! {
    pub enum Lifestyle {
        BeachMarina => ("beach-marina", "Beach & marina"),
        CityBuzz => ("city-buzz", "City buzz"),
        QuietSuburb => ("quiet-suburb", "Quiet suburb"),
        NearSchools => ("near-schools", "Near schools"),
        NearWork => ("near-work", "Near work"),
    }
}

choice_enum! {
    pub enum PropertyType {
        Apartment => ("apartment", "Apartment"),
        Townhouse => ("townhouse", "Townhouse"),
        Villa => ("villa", "Villa"),
    }
}

choice_enum! {
    pub enum Bedrooms {
        Studio => ("studio", "Studio"),
        One => ("1", "1 bedroom"),
        Two => ("2", "2 bedrooms"),
        Three => ("3", "3 bedrooms"),
        Four => ("4", "4 bedrooms"),
        FivePlus => ("5-plus", "5+ bedrooms"),
    }
}

choice_enum! {
    /// Monthly housing budget
    pub enum BudgetBand {
        Under10k => ("under-10k", "Under AED 10k"),
        From10kTo20k => ("10k-20k", "AED 10k-20k"),
        From20kTo35k => ("20k-35k", "AED 20k-35k"),
        Over35k => ("35k-plus", "AED 35k+"),
    }
}

choice_enum! {
    pub enum Tenure {
        Rent => ("rent", "Rent"),
        Buy => ("buy", "Buy"),
        Undecided => ("undecided", "Undecided"),
    }
}

choice_enum! {
    pub enum Service {
        Concierge => ("concierge", "Concierge"),
        Leasing => ("leasing", "Leasing"),
        Investments => ("investments", "Investments"),
        PropertyManagement => ("property-management", "Property management"),
        SchoolSearch => ("school-search", "School search"),
        VisaEmiratesId => ("visa-emirates-id", "Visa & Emirates ID"),
        CarDriver => ("car-driver", "Car & driver"),
        PetRelocation => ("pet-relocation", "Pet relocation"),
    }
}

choice_enum! {
    pub enum SpendingPriority {
        Comfort => ("comfort", "Comfort"),
        Balanced => ("balanced", "Balanced"),
        SaveMore => ("save-more", "Save more"),
    }
}

choice_enum! {
    pub enum SavingsGoal {
        EmergencyFund => ("emergency-fund", "Emergency fund"),
        PropertyDeposit => ("property-deposit", "Property deposit"),
        Education => ("education", "Education"),
        Lifestyle => ("lifestyle", "Lifestyle"),
    }
}

// Viewing trip

choice_enum! {
    pub enum Party {
        Solo => ("solo", "Solo"),
        Couple => ("couple", "Couple"),
        Family => ("family", "Family"),
    }
}

choice_enum! {
    /// Visa situation on arrival, grouped by nationality
    pub enum NationalityGroup {
        Gcc => ("gcc", "GCC national"),
        OnArrival30 => ("voa-30", "Visa on arrival (30 days)"),
        OnArrival90 => ("voa-90", "Visa on arrival (90 days)"),
        VisitVisa => ("visit-visa", "Visit visa required"),
        NotSure => ("not-sure", "Not sure"),
    }
}

choice_enum! {
    pub enum TripLength {
        ShortStay => ("2-3-nights", "2-3 nights"),
        MidStay => ("4-5-nights", "4-5 nights"),
        OneWeek => ("one-week", "One week"),
        TwoWeeks => ("two-weeks", "Two weeks"),
    }
}

choice_enum! {
    pub enum TripDates {
        Fixed => ("fixed", "Fixed dates"),
        Flexible => ("flexible", "Flexible"),
    }
}

choice_enum! {
    pub enum TravelWindow {
        NextMonth => ("next-month", "Next month"),
        OneToThreeMonths => ("1-3-months", "1-3 months"),
        ThreeToSixMonths => ("3-6-months", "3-6 months"),
    }
}

choice_enum! {
    pub enum Interest {
        OffPlan => ("off-plan", "Off-plan launches"),
        ReadyApartments => ("ready-apartments", "Ready apartments"),
        Villas => ("villas", "Villas & townhouses"),
        Branded => ("branded", "Branded residences"),
        Commercial => ("commercial", "Commercial units"),
    }
}

choice_enum! {
    pub enum Purpose {
        LiveIn => ("live-in", "Live in"),
        Invest => ("invest", "Invest"),
        Both => ("both", "Both"),
    }
}

choice_enum! {
    pub enum PurchaseBudget {
        Under1m => ("under-1m", "Under AED 1M"),
        From1mTo2m => ("1m-2m", "AED 1M-2M"),
        From2mTo5m => ("2m-5m", "AED 2M-5M"),
        Over5m => ("5m-plus", "AED 5M+"),
    }
}

choice_enum! {
    pub enum Financing {
        Cash => ("cash", "Cash"),
        Mortgage => ("mortgage", "Mortgage"),
        NotSure => ("not-sure", "Not sure"),
    }
}

choice_enum! {
    pub enum MortgageStatus {
        PreApproved => ("pre-approved", "Pre-approved"),
        NotApplied => ("not-applied", "Not yet applied"),
    }
}

choice_enum! {
    pub enum TripExtra {
        AirportPickup => ("airport-pickup", "Airport pickup"),
        HotelBooking => ("hotel-booking", "Hotel booking"),
        Chauffeur => ("chauffeur", "Chauffeured viewings"),
        DeveloperMeetings => ("developer-meetings", "Developer meetings"),
        MortgageAdvisor => ("mortgage-advisor", "Mortgage advisor session"),
    }
}

choice_enum! {
    pub enum Accommodation {
        Hotel => ("hotel", "Hotel"),
        ServicedApartment => ("serviced-apartment", "Serviced apartment"),
        OwnArrangements => ("own", "Arranging myself"),
    }
}
