//! Prompt construction.
//!
//! Each operation has one fixed template; the only variable parts are the
//! user-supplied fields, interpolated as-is.

use super::trip::{IdeasRequest, TripRequest, UpdateRequest};

/// Currency every budget breakdown is converted into.
pub const TARGET_CURRENCY: &str = "Indian Rupees";
pub const TARGET_CURRENCY_CODE: &str = "INR";

/// Fixed conversion rates into [`TARGET_CURRENCY_CODE`], one unit of the source currency each.
pub const CONVERSION_RATES: [(&str, u32); 3] = [("USD", 83), ("GBP", 105), ("EUR", 90)];

/// Number of sightseeing spots, tips and quick ideas requested.
pub const LIST_LENGTH: usize = 5;

fn conversion_note() -> String {
    let rates = CONVERSION_RATES
        .iter()
        .map(|(code, rate)| format!("1 {code} = {rate} {TARGET_CURRENCY_CODE}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Convert all amounts to {TARGET_CURRENCY_CODE} using {rates}")
}

fn numbered(label: &str) -> String {
    (1..=LIST_LENGTH)
        .map(|n| format!("{n}. {label} {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for a full day-by-day travel plan.
pub fn trip_plan(trip: &TripRequest) -> String {
    let spots = (1..=LIST_LENGTH)
        .map(|n| format!("{n}. [Spot {n}]: [Brief description]"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create a detailed travel plan for the following:\n\
         Destination: {destination}\n\
         Travel Dates: From {start} to {end}\n\
         Interests: {interests}\n\
         Budget: {budget}\n\
         \n\
         IMPORTANT: Format the response in a clear STEP-BY-STEP structure with proper headings and numbered steps.\n\
         \n\
         Please provide:\n\
         \n\
         ## DESTINATION OVERVIEW\n\
         * Brief information about {destination} for travelers\n\
         * Key facts travelers should know\n\
         \n\
         ## STEP-BY-STEP ITINERARY\n\
         ### DAY 1: [Date]\n\
         1. Morning: [Activities]\n\
         2. Lunch: [Suggestions]\n\
         3. Afternoon: [Activities]\n\
         4. Dinner: [Suggestions]\n\
         5. Evening: [Activities if applicable]\n\
         \n\
         [Continue for each day]\n\
         \n\
         ## TOP SIGHTSEEING SPOTS\n\
         {spots}\n\
         \n\
         ## STEP-BY-STEP BUDGET BREAKDOWN (in {currency})\n\
         * {conversion}\n\
         \n\
         1. Accommodation\n\
         2. Food\n\
         3. Transportation\n\
         4. Activities\n\
         5. Miscellaneous\n\
         6. Total\n\
         \n\
         ## STEP-BY-STEP TRAVEL TIPS\n\
         {tips}\n",
        destination = trip.destination,
        start = trip.start_date,
        end = trip.end_date,
        interests = trip.interests,
        budget = trip.budget,
        spots = spots,
        currency = TARGET_CURRENCY,
        conversion = conversion_note(),
        tips = numbered("Tip"),
    )
}

/// Prompt asking the model to revise an existing plan.
pub fn plan_update(update: &UpdateRequest) -> String {
    format!(
        "Current travel plan:\n\
         {plan}\n\
         \n\
         Request for update:\n\
         {instruction}\n\
         \n\
         Please update the travel plan based on this request.\n\
         Format using markdown with clear headings and bullet points.\n",
        plan = update.current_plan,
        instruction = update.update_instruction,
    )
}

/// Prompt for a five-section destination guide.
pub fn destination_guide(destination: &str) -> String {
    format!(
        "Provide detailed information about {destination} as a travel destination.\n\
         \n\
         Format:\n\
         ## DESTINATION OVERVIEW\n\
         * Brief history and background\n\
         \n\
         ## TOP ATTRACTIONS\n\
         * Attraction: Description\n\
         \n\
         ## BEST TIME TO VISIT\n\
         * Months, weather\n\
         \n\
         ## LOCAL CUISINE\n\
         * Dishes and restaurant suggestions\n\
         \n\
         ## TRANSPORTATION OPTIONS\n\
         * Local travel tips\n"
    )
}

/// Prompt for a handful of short activity ideas.
pub fn quick_ideas(request: &IdeasRequest) -> String {
    format!(
        "Suggest {LIST_LENGTH} short activity ideas for someone interested in {interest} in {destination}.\n\
         Format using markdown headers and bullet points.\n",
        interest = request.interest,
        destination = request.destination,
    )
}
