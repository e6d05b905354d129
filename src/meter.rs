mod id;
mod reading;
mod readings;

pub use self::{
    id::SmartMeterId,
    reading::ElectricityReading,
    readings::{InvalidMeterReadings, MeterReadings},
};
