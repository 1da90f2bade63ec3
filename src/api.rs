mod octopus;

pub use self::octopus::{
    Api as Octopus,
    ApiError,
    Consumption,
    ConsumptionQuery,
    DEFAULT_BASE_URL,
    ElectricityMeterPoint,
    GroupBy,
    OrderBy,
};
