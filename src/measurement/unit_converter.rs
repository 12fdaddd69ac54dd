//! Unit conversion table
//!
//! Free functions converting between metric and imperial units of
//! distance, speed and area.

pub const MILES_PER_KILOMETER: f64 = 0.621371192237;
pub const FEET_PER_METER: f64 = 3.28083989501;
pub const FEET_PER_MILE: f64 = 5280.0;
pub const METERS_PER_KILOMETER: f64 = 1000.0;

// Distance

pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

pub fn meters_to_miles(meters: f64) -> f64 {
    kilometers_to_miles(meters_to_kilometers(meters))
}

pub fn kilometers_to_meters(kilometers: f64) -> f64 {
    kilometers * METERS_PER_KILOMETER
}

pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * MILES_PER_KILOMETER
}

pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles / MILES_PER_KILOMETER
}

pub fn miles_to_meters(miles: f64) -> f64 {
    kilometers_to_meters(miles_to_kilometers(miles))
}

// Speed

pub fn kilometers_per_hour_to_miles_per_hour(kilometers_per_hour: f64) -> f64 {
    kilometers_per_hour * MILES_PER_KILOMETER
}

pub fn miles_per_hour_to_kilometers_per_hour(miles_per_hour: f64) -> f64 {
    miles_per_hour / MILES_PER_KILOMETER
}

// Area

pub fn square_meters_to_square_kilometers(square_meters: f64) -> f64 {
    square_meters / (METERS_PER_KILOMETER * METERS_PER_KILOMETER)
}

pub fn square_meters_to_square_feet(square_meters: f64) -> f64 {
    square_meters * FEET_PER_METER * FEET_PER_METER
}

pub fn square_meters_to_square_miles(square_meters: f64) -> f64 {
    let miles_per_meter = MILES_PER_KILOMETER / METERS_PER_KILOMETER;
    square_meters * miles_per_meter * miles_per_meter
}

pub fn square_kilometers_to_square_meters(square_kilometers: f64) -> f64 {
    square_kilometers * METERS_PER_KILOMETER * METERS_PER_KILOMETER
}

pub fn square_feet_to_square_meters(square_feet: f64) -> f64 {
    square_feet / (FEET_PER_METER * FEET_PER_METER)
}

pub fn square_miles_to_square_meters(square_miles: f64) -> f64 {
    let meters_per_mile = METERS_PER_KILOMETER / MILES_PER_KILOMETER;
    square_miles * meters_per_mile * meters_per_mile
}
