pub mod calc_co2;
pub mod calc_co2_offline;
