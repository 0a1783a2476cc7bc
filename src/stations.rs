/// Station registry for the SeaSafe coastal monitoring service.
///
/// Defines the canonical list of coastal stations and fishing harbors covered
/// by the service, with baseline conditions used whenever live data is
/// unavailable (no WeatherAPI key, upstream outage). This is the single source
/// of truth for location ids; other modules look stations up here rather than
/// hardcoding ids or coordinates.

use crate::model::LocationReading;

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Baseline sea state for a station, used as the mock/fallback reading.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub wave_height_m: f64,
    pub wind_speed_kph: f64,
    pub sea_temperature_c: f64,
    pub visibility_nm: f64,
    pub pressure_hpa: f64,
    pub humidity_pct: f64,
    pub tide_m: f64,
}

/// Metadata for a single coastal station.
pub struct Station {
    /// Lowercase slug, unique across the registry.
    pub id: &'static str,
    pub name: &'static str,
    /// Coastal state or territory, for grouping.
    pub region: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Local sunrise / sunset, "HH:MM".
    pub sunrise: &'static str,
    pub sunset: &'static str,
    pub baseline: Baseline,
}

/// Monitored stations, ordered clockwise along the coast from Gujarat to
/// West Bengal, then the island territories.
pub static STATION_REGISTRY: &[Station] = &[
    Station {
        id: "kandla",
        name: "Kandla Port",
        region: "Gujarat",
        latitude: 23.0033,
        longitude: 70.2195,
        sunrise: "06:58",
        sunset: "18:55",
        baseline: Baseline {
            wave_height_m: 1.2,
            wind_speed_kph: 15.0,
            sea_temperature_c: 27.5,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 75.0,
            tide_m: 2.1,
        },
    },
    Station {
        id: "mundra",
        name: "Mundra",
        region: "Gujarat",
        latitude: 22.8427,
        longitude: 69.7346,
        sunrise: "06:56",
        sunset: "18:52",
        baseline: Baseline {
            wave_height_m: 1.1,
            wind_speed_kph: 14.0,
            sea_temperature_c: 27.8,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 76.0,
            tide_m: 2.0,
        },
    },
    Station {
        id: "okha",
        name: "Okha Port",
        region: "Gujarat",
        latitude: 22.4633,
        longitude: 69.0706,
        sunrise: "06:59",
        sunset: "18:56",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 18.0,
            sea_temperature_c: 27.1,
            visibility_nm: 12.0,
            pressure_hpa: 1011.0,
            humidity_pct: 78.0,
            tide_m: 1.8,
        },
    },
    Station {
        id: "dwarka",
        name: "Dwarka",
        region: "Gujarat",
        latitude: 22.2394,
        longitude: 68.9678,
        sunrise: "07:01",
        sunset: "18:58",
        baseline: Baseline {
            wave_height_m: 2.0,
            wind_speed_kph: 22.0,
            sea_temperature_c: 26.9,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 79.0,
            tide_m: 1.6,
        },
    },
    Station {
        id: "porbandar",
        name: "Porbandar",
        region: "Gujarat",
        latitude: 21.6417,
        longitude: 69.6293,
        sunrise: "06:55",
        sunset: "18:50",
        baseline: Baseline {
            wave_height_m: 2.8,
            wind_speed_kph: 35.0,
            sea_temperature_c: 27.5,
            visibility_nm: 6.0,
            pressure_hpa: 1008.0,
            humidity_pct: 83.0,
            tide_m: 1.6,
        },
    },
    Station {
        id: "veraval",
        name: "Veraval Harbor",
        region: "Gujarat",
        latitude: 20.9037,
        longitude: 70.3667,
        sunrise: "06:52",
        sunset: "18:48",
        baseline: Baseline {
            wave_height_m: 2.5,
            wind_speed_kph: 30.0,
            sea_temperature_c: 27.8,
            visibility_nm: 7.0,
            pressure_hpa: 1009.0,
            humidity_pct: 80.0,
            tide_m: 1.5,
        },
    },
    Station {
        id: "diu",
        name: "Diu Fishery",
        region: "Gujarat",
        latitude: 20.7144,
        longitude: 70.9874,
        sunrise: "06:50",
        sunset: "18:45",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 16.0,
            sea_temperature_c: 28.0,
            visibility_nm: 10.0,
            pressure_hpa: 1011.0,
            humidity_pct: 78.0,
            tide_m: 1.3,
        },
    },
    Station {
        id: "bhavnagar",
        name: "Bhavnagar",
        region: "Gujarat",
        latitude: 21.7645,
        longitude: 72.1519,
        sunrise: "06:53",
        sunset: "18:49",
        baseline: Baseline {
            wave_height_m: 1.0,
            wind_speed_kph: 12.0,
            sea_temperature_c: 28.3,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 75.0,
            tide_m: 2.5,
        },
    },
    Station {
        id: "dahanu",
        name: "Dahanu",
        region: "Maharashtra",
        latitude: 19.9806,
        longitude: 72.7303,
        sunrise: "06:50",
        sunset: "18:42",
        baseline: Baseline {
            wave_height_m: 1.3,
            wind_speed_kph: 16.0,
            sea_temperature_c: 27.5,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 80.0,
            tide_m: 1.7,
        },
    },
    Station {
        id: "mumbai",
        name: "Mumbai Port",
        region: "Maharashtra",
        latitude: 18.9220,
        longitude: 72.8347,
        sunrise: "06:50",
        sunset: "18:45",
        baseline: Baseline {
            wave_height_m: 3.5,
            wind_speed_kph: 45.0,
            sea_temperature_c: 27.8,
            visibility_nm: 4.0,
            pressure_hpa: 1005.0,
            humidity_pct: 85.0,
            tide_m: 2.1,
        },
    },
    Station {
        id: "alibag",
        name: "Alibag",
        region: "Maharashtra",
        latitude: 18.6416,
        longitude: 72.8722,
        sunrise: "06:48",
        sunset: "18:44",
        baseline: Baseline {
            wave_height_m: 1.8,
            wind_speed_kph: 20.0,
            sea_temperature_c: 27.9,
            visibility_nm: 11.0,
            pressure_hpa: 1011.0,
            humidity_pct: 82.0,
            tide_m: 1.8,
        },
    },
    Station {
        id: "murud",
        name: "Murud-Janjira",
        region: "Maharashtra",
        latitude: 18.3284,
        longitude: 72.9642,
        sunrise: "06:46",
        sunset: "18:42",
        baseline: Baseline {
            wave_height_m: 1.7,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.0,
            visibility_nm: 12.0,
            pressure_hpa: 1010.0,
            humidity_pct: 80.0,
            tide_m: 1.6,
        },
    },
    Station {
        id: "ratnagiri",
        name: "Ratnagiri",
        region: "Maharashtra",
        latitude: 16.9902,
        longitude: 73.3120,
        sunrise: "06:44",
        sunset: "18:40",
        baseline: Baseline {
            wave_height_m: 2.1,
            wind_speed_kph: 24.0,
            sea_temperature_c: 28.1,
            visibility_nm: 9.0,
            pressure_hpa: 1009.0,
            humidity_pct: 78.0,
            tide_m: 1.5,
        },
    },
    Station {
        id: "malvan",
        name: "Malvan Fishery",
        region: "Maharashtra",
        latitude: 16.0601,
        longitude: 73.4682,
        sunrise: "06:42",
        sunset: "18:42",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 15.0,
            sea_temperature_c: 28.2,
            visibility_nm: 12.0,
            pressure_hpa: 1011.0,
            humidity_pct: 76.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "vengurla",
        name: "Vengurla",
        region: "Maharashtra",
        latitude: 15.8617,
        longitude: 73.6334,
        sunrise: "06:41",
        sunset: "18:41",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 14.0,
            sea_temperature_c: 28.3,
            visibility_nm: 12.0,
            pressure_hpa: 1011.0,
            humidity_pct: 75.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "goa",
        name: "Goa (Panaji)",
        region: "Goa",
        latitude: 15.4909,
        longitude: 73.8278,
        sunrise: "06:40",
        sunset: "18:40",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.5,
            visibility_nm: 12.0,
            pressure_hpa: 1012.0,
            humidity_pct: 75.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "mormugao",
        name: "Mormugao",
        region: "Goa",
        latitude: 15.3986,
        longitude: 73.8058,
        sunrise: "06:39",
        sunset: "18:39",
        baseline: Baseline {
            wave_height_m: 1.7,
            wind_speed_kph: 20.0,
            sea_temperature_c: 28.5,
            visibility_nm: 11.0,
            pressure_hpa: 1011.0,
            humidity_pct: 76.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "canacona",
        name: "Canacona",
        region: "Goa",
        latitude: 15.0113,
        longitude: 74.0223,
        sunrise: "06:38",
        sunset: "18:38",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 17.0,
            sea_temperature_c: 28.6,
            visibility_nm: 12.0,
            pressure_hpa: 1012.0,
            humidity_pct: 74.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "karwar",
        name: "Karwar",
        region: "Karnataka",
        latitude: 14.8053,
        longitude: 74.1332,
        sunrise: "06:36",
        sunset: "18:36",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 16.0,
            sea_temperature_c: 28.4,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 77.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "gokarna",
        name: "Gokarna",
        region: "Karnataka",
        latitude: 14.5388,
        longitude: 74.3168,
        sunrise: "06:35",
        sunset: "18:35",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 15.0,
            sea_temperature_c: 28.5,
            visibility_nm: 12.0,
            pressure_hpa: 1011.0,
            humidity_pct: 78.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "honnavar",
        name: "Honnavar",
        region: "Karnataka",
        latitude: 14.2798,
        longitude: 74.4439,
        sunrise: "06:34",
        sunset: "18:34",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.3,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 79.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "bhatkal",
        name: "Bhatkal",
        region: "Karnataka",
        latitude: 13.9803,
        longitude: 74.5583,
        sunrise: "06:33",
        sunset: "18:33",
        baseline: Baseline {
            wave_height_m: 1.7,
            wind_speed_kph: 19.0,
            sea_temperature_c: 28.4,
            visibility_nm: 9.0,
            pressure_hpa: 1009.0,
            humidity_pct: 80.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "kundapura",
        name: "Kundapura",
        region: "Karnataka",
        latitude: 13.6272,
        longitude: 74.6931,
        sunrise: "06:32",
        sunset: "18:32",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 17.0,
            sea_temperature_c: 28.5,
            visibility_nm: 10.0,
            pressure_hpa: 1011.0,
            humidity_pct: 77.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "malpe",
        name: "Malpe Fishing Harbor",
        region: "Karnataka",
        latitude: 13.3500,
        longitude: 74.6975,
        sunrise: "06:33",
        sunset: "18:38",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.5,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 78.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "mangalore",
        name: "Mangalore",
        region: "Karnataka",
        latitude: 12.9141,
        longitude: 74.8560,
        sunrise: "06:30",
        sunset: "18:35",
        baseline: Baseline {
            wave_height_m: 1.9,
            wind_speed_kph: 22.0,
            sea_temperature_c: 28.2,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 79.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "kasaragod",
        name: "Kasaragod",
        region: "Kerala",
        latitude: 12.5085,
        longitude: 74.9904,
        sunrise: "06:28",
        sunset: "18:33",
        baseline: Baseline {
            wave_height_m: 1.7,
            wind_speed_kph: 20.0,
            sea_temperature_c: 28.6,
            visibility_nm: 10.0,
            pressure_hpa: 1011.0,
            humidity_pct: 80.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "kannur",
        name: "Kannur",
        region: "Kerala",
        latitude: 11.8745,
        longitude: 75.3704,
        sunrise: "06:26",
        sunset: "18:31",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.7,
            visibility_nm: 11.0,
            pressure_hpa: 1011.0,
            humidity_pct: 78.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "kozhikode",
        name: "Kozhikode",
        region: "Kerala",
        latitude: 11.2588,
        longitude: 75.7804,
        sunrise: "06:24",
        sunset: "18:29",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 16.0,
            sea_temperature_c: 28.8,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 81.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "kochi",
        name: "Kochi",
        region: "Kerala",
        latitude: 9.9312,
        longitude: 76.2673,
        sunrise: "06:20",
        sunset: "18:25",
        baseline: Baseline {
            wave_height_m: 1.8,
            wind_speed_kph: 20.0,
            sea_temperature_c: 28.9,
            visibility_nm: 11.0,
            pressure_hpa: 1011.0,
            humidity_pct: 75.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "alappuzha",
        name: "Alappuzha",
        region: "Kerala",
        latitude: 9.4981,
        longitude: 76.3388,
        sunrise: "06:18",
        sunset: "18:24",
        baseline: Baseline {
            wave_height_m: 1.7,
            wind_speed_kph: 19.0,
            sea_temperature_c: 28.8,
            visibility_nm: 12.0,
            pressure_hpa: 1012.0,
            humidity_pct: 76.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "kollam",
        name: "Kollam",
        region: "Kerala",
        latitude: 8.8932,
        longitude: 76.6141,
        sunrise: "06:16",
        sunset: "18:22",
        baseline: Baseline {
            wave_height_m: 1.9,
            wind_speed_kph: 22.0,
            sea_temperature_c: 28.7,
            visibility_nm: 10.0,
            pressure_hpa: 1011.0,
            humidity_pct: 77.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "thiruvananthapuram",
        name: "Thiruvananthapuram",
        region: "Kerala",
        latitude: 8.5241,
        longitude: 76.9366,
        sunrise: "06:15",
        sunset: "18:21",
        baseline: Baseline {
            wave_height_m: 2.0,
            wind_speed_kph: 23.0,
            sea_temperature_c: 28.6,
            visibility_nm: 9.0,
            pressure_hpa: 1010.0,
            humidity_pct: 79.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "kanyakumari",
        name: "Kanyakumari",
        region: "Tamil Nadu",
        latitude: 8.0883,
        longitude: 77.5385,
        sunrise: "06:25",
        sunset: "18:30",
        baseline: Baseline {
            wave_height_m: 2.3,
            wind_speed_kph: 28.0,
            sea_temperature_c: 28.7,
            visibility_nm: 9.0,
            pressure_hpa: 1010.0,
            humidity_pct: 82.0,
            tide_m: 1.4,
        },
    },
    Station {
        id: "tuticorin",
        name: "Tuticorin (Thoothukudi)",
        region: "Tamil Nadu",
        latitude: 8.7642,
        longitude: 78.1348,
        sunrise: "06:22",
        sunset: "18:27",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 19.0,
            sea_temperature_c: 29.3,
            visibility_nm: 13.0,
            pressure_hpa: 1011.0,
            humidity_pct: 74.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "rameswaram",
        name: "Rameswaram",
        region: "Tamil Nadu",
        latitude: 9.2876,
        longitude: 79.3129,
        sunrise: "06:15",
        sunset: "18:22",
        baseline: Baseline {
            wave_height_m: 1.1,
            wind_speed_kph: 12.0,
            sea_temperature_c: 29.5,
            visibility_nm: 15.0,
            pressure_hpa: 1011.0,
            humidity_pct: 76.0,
            tide_m: 0.8,
        },
    },
    Station {
        id: "nagapattinam",
        name: "Nagapattinam",
        region: "Tamil Nadu",
        latitude: 10.7656,
        longitude: 79.8424,
        sunrise: "06:12",
        sunset: "18:18",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 16.0,
            sea_temperature_c: 29.2,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 79.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "karaikal",
        name: "Karaikal",
        region: "Tamil Nadu",
        latitude: 10.9254,
        longitude: 79.8380,
        sunrise: "06:11",
        sunset: "18:17",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 15.0,
            sea_temperature_c: 29.3,
            visibility_nm: 12.0,
            pressure_hpa: 1011.0,
            humidity_pct: 78.0,
            tide_m: 0.8,
        },
    },
    Station {
        id: "cuddalore",
        name: "Cuddalore",
        region: "Tamil Nadu",
        latitude: 11.7480,
        longitude: 79.7714,
        sunrise: "06:10",
        sunset: "18:16",
        baseline: Baseline {
            wave_height_m: 1.3,
            wind_speed_kph: 14.0,
            sea_temperature_c: 29.1,
            visibility_nm: 13.0,
            pressure_hpa: 1011.0,
            humidity_pct: 77.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "puducherry",
        name: "Puducherry",
        region: "Tamil Nadu",
        latitude: 11.9416,
        longitude: 79.8083,
        sunrise: "06:09",
        sunset: "18:15",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 15.0,
            sea_temperature_c: 29.2,
            visibility_nm: 12.0,
            pressure_hpa: 1012.0,
            humidity_pct: 76.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "chennai",
        name: "Chennai",
        region: "Tamil Nadu",
        latitude: 13.0827,
        longitude: 80.2707,
        sunrise: "06:10",
        sunset: "18:15",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 15.0,
            sea_temperature_c: 29.1,
            visibility_nm: 12.0,
            pressure_hpa: 1010.0,
            humidity_pct: 80.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "kasimedu",
        name: "Kasimedu Fishing Harbor",
        region: "Tamil Nadu",
        latitude: 13.1251,
        longitude: 80.2982,
        sunrise: "06:10",
        sunset: "18:15",
        baseline: Baseline {
            wave_height_m: 1.3,
            wind_speed_kph: 15.0,
            sea_temperature_c: 29.1,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 81.0,
            tide_m: 0.9,
        },
    },
    Station {
        id: "ennore",
        name: "Ennore Creek",
        region: "Tamil Nadu",
        latitude: 13.2120,
        longitude: 80.3236,
        sunrise: "06:09",
        sunset: "18:14",
        baseline: Baseline {
            wave_height_m: 1.2,
            wind_speed_kph: 14.0,
            sea_temperature_c: 29.2,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 82.0,
            tide_m: 1.0,
        },
    },
    Station {
        id: "pulicat",
        name: "Pulicat",
        region: "Tamil Nadu",
        latitude: 13.4182,
        longitude: 80.3168,
        sunrise: "06:08",
        sunset: "18:13",
        baseline: Baseline {
            wave_height_m: 1.3,
            wind_speed_kph: 14.0,
            sea_temperature_c: 29.1,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 80.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "krishnapatnam",
        name: "Krishnapatnam",
        region: "Andhra Pradesh",
        latitude: 14.2492,
        longitude: 80.1415,
        sunrise: "06:07",
        sunset: "18:12",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 16.0,
            sea_temperature_c: 29.0,
            visibility_nm: 10.0,
            pressure_hpa: 1011.0,
            humidity_pct: 79.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "nizampatnam",
        name: "Nizampatnam",
        region: "Andhra Pradesh",
        latitude: 15.8973,
        longitude: 80.6698,
        sunrise: "06:06",
        sunset: "18:13",
        baseline: Baseline {
            wave_height_m: 1.4,
            wind_speed_kph: 15.0,
            sea_temperature_c: 29.0,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 79.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "machilipatnam",
        name: "Machilipatnam",
        region: "Andhra Pradesh",
        latitude: 16.1833,
        longitude: 81.1333,
        sunrise: "06:08",
        sunset: "18:18",
        baseline: Baseline {
            wave_height_m: 1.7,
            wind_speed_kph: 16.0,
            sea_temperature_c: 29.0,
            visibility_nm: 11.0,
            pressure_hpa: 1009.0,
            humidity_pct: 81.0,
            tide_m: 1.3,
        },
    },
    Station {
        id: "kakinada",
        name: "Kakinada",
        region: "Andhra Pradesh",
        latitude: 16.9891,
        longitude: 82.2475,
        sunrise: "06:03",
        sunset: "18:12",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.8,
            visibility_nm: 12.0,
            pressure_hpa: 1011.0,
            humidity_pct: 78.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "visakhapatnam",
        name: "Visakhapatnam",
        region: "Andhra Pradesh",
        latitude: 17.6868,
        longitude: 83.2185,
        sunrise: "06:05",
        sunset: "18:20",
        baseline: Baseline {
            wave_height_m: 2.1,
            wind_speed_kph: 25.5,
            sea_temperature_c: 28.4,
            visibility_nm: 10.0,
            pressure_hpa: 1012.0,
            humidity_pct: 78.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "bheemili",
        name: "Bheemunipatnam",
        region: "Andhra Pradesh",
        latitude: 17.8893,
        longitude: 83.4542,
        sunrise: "06:04",
        sunset: "18:19",
        baseline: Baseline {
            wave_height_m: 2.2,
            wind_speed_kph: 26.0,
            sea_temperature_c: 28.3,
            visibility_nm: 9.0,
            pressure_hpa: 1011.0,
            humidity_pct: 79.0,
            tide_m: 1.2,
        },
    },
    Station {
        id: "kalingapatnam",
        name: "Kalingapatnam",
        region: "Andhra Pradesh",
        latitude: 18.3333,
        longitude: 84.1167,
        sunrise: "06:02",
        sunset: "18:16",
        baseline: Baseline {
            wave_height_m: 2.0,
            wind_speed_kph: 23.0,
            sea_temperature_c: 28.5,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 80.0,
            tide_m: 1.3,
        },
    },
    Station {
        id: "gopalpur",
        name: "Gopalpur",
        region: "Odisha",
        latitude: 19.2618,
        longitude: 84.9082,
        sunrise: "06:01",
        sunset: "18:14",
        baseline: Baseline {
            wave_height_m: 2.5,
            wind_speed_kph: 28.0,
            sea_temperature_c: 28.2,
            visibility_nm: 8.0,
            pressure_hpa: 1009.0,
            humidity_pct: 82.0,
            tide_m: 1.4,
        },
    },
    Station {
        id: "puri",
        name: "Puri Beach",
        region: "Odisha",
        latitude: 19.7983,
        longitude: 85.8245,
        sunrise: "05:58",
        sunset: "18:12",
        baseline: Baseline {
            wave_height_m: 2.8,
            wind_speed_kph: 32.0,
            sea_temperature_c: 28.1,
            visibility_nm: 7.0,
            pressure_hpa: 1008.0,
            humidity_pct: 85.0,
            tide_m: 1.6,
        },
    },
    Station {
        id: "paradip",
        name: "Paradip",
        region: "Odisha",
        latitude: 20.2638,
        longitude: 86.6669,
        sunrise: "05:55",
        sunset: "18:10",
        baseline: Baseline {
            wave_height_m: 3.2,
            wind_speed_kph: 40.0,
            sea_temperature_c: 28.0,
            visibility_nm: 5.0,
            pressure_hpa: 1006.0,
            humidity_pct: 88.0,
            tide_m: 1.8,
        },
    },
    Station {
        id: "dhamra",
        name: "Dhamra Port",
        region: "Odisha",
        latitude: 20.7937,
        longitude: 86.9535,
        sunrise: "05:56",
        sunset: "18:11",
        baseline: Baseline {
            wave_height_m: 2.4,
            wind_speed_kph: 26.0,
            sea_temperature_c: 28.1,
            visibility_nm: 9.0,
            pressure_hpa: 1009.0,
            humidity_pct: 83.0,
            tide_m: 1.9,
        },
    },
    Station {
        id: "chandipur",
        name: "Chandipur",
        region: "Odisha",
        latitude: 21.4429,
        longitude: 87.0519,
        sunrise: "05:54",
        sunset: "18:09",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.3,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 80.0,
            tide_m: 2.2,
        },
    },
    Station {
        id: "digha",
        name: "Digha Coast",
        region: "West Bengal",
        latitude: 21.6266,
        longitude: 87.5074,
        sunrise: "05:52",
        sunset: "18:08",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 18.0,
            sea_temperature_c: 28.6,
            visibility_nm: 9.0,
            pressure_hpa: 1009.0,
            humidity_pct: 84.0,
            tide_m: 2.0,
        },
    },
    Station {
        id: "bakkhali",
        name: "Bakkhali",
        region: "West Bengal",
        latitude: 21.5647,
        longitude: 88.2618,
        sunrise: "05:50",
        sunset: "18:05",
        baseline: Baseline {
            wave_height_m: 1.8,
            wind_speed_kph: 20.0,
            sea_temperature_c: 28.5,
            visibility_nm: 10.0,
            pressure_hpa: 1010.0,
            humidity_pct: 82.0,
            tide_m: 2.1,
        },
    },
    Station {
        id: "haldia",
        name: "Haldia",
        region: "West Bengal",
        latitude: 22.0667,
        longitude: 88.0698,
        sunrise: "05:50",
        sunset: "18:05",
        baseline: Baseline {
            wave_height_m: 1.3,
            wind_speed_kph: 14.0,
            sea_temperature_c: 28.8,
            visibility_nm: 8.0,
            pressure_hpa: 1010.0,
            humidity_pct: 85.0,
            tide_m: 2.5,
        },
    },
    Station {
        id: "sagar",
        name: "Sagar Island",
        region: "West Bengal",
        latitude: 21.7317,
        longitude: 88.1362,
        sunrise: "05:51",
        sunset: "18:06",
        baseline: Baseline {
            wave_height_m: 1.9,
            wind_speed_kph: 22.0,
            sea_temperature_c: 28.4,
            visibility_nm: 9.0,
            pressure_hpa: 1008.0,
            humidity_pct: 86.0,
            tide_m: 2.3,
        },
    },
    Station {
        id: "portblair",
        name: "Port Blair (Andaman)",
        region: "Andaman & Nicobar",
        latitude: 11.6234,
        longitude: 92.7265,
        sunrise: "05:30",
        sunset: "17:40",
        baseline: Baseline {
            wave_height_m: 2.2,
            wind_speed_kph: 25.0,
            sea_temperature_c: 29.5,
            visibility_nm: 10.0,
            pressure_hpa: 1009.0,
            humidity_pct: 85.0,
            tide_m: 1.5,
        },
    },
    Station {
        id: "havelock",
        name: "Havelock Island",
        region: "Andaman & Nicobar",
        latitude: 11.9761,
        longitude: 92.9876,
        sunrise: "05:28",
        sunset: "17:39",
        baseline: Baseline {
            wave_height_m: 2.0,
            wind_speed_kph: 22.0,
            sea_temperature_c: 29.6,
            visibility_nm: 11.0,
            pressure_hpa: 1010.0,
            humidity_pct: 83.0,
            tide_m: 1.4,
        },
    },
    Station {
        id: "kavaratti",
        name: "Kavaratti (Lakshadweep)",
        region: "Lakshadweep",
        latitude: 10.5667,
        longitude: 72.6369,
        sunrise: "06:45",
        sunset: "18:45",
        baseline: Baseline {
            wave_height_m: 1.5,
            wind_speed_kph: 15.0,
            sea_temperature_c: 29.8,
            visibility_nm: 14.0,
            pressure_hpa: 1011.0,
            humidity_pct: 75.0,
            tide_m: 1.1,
        },
    },
    Station {
        id: "minicoy",
        name: "Minicoy Island",
        region: "Lakshadweep",
        latitude: 8.2818,
        longitude: 73.0489,
        sunrise: "06:40",
        sunset: "18:40",
        baseline: Baseline {
            wave_height_m: 1.6,
            wind_speed_kph: 17.0,
            sea_temperature_c: 29.7,
            visibility_nm: 13.0,
            pressure_hpa: 1010.0,
            humidity_pct: 76.0,
            tide_m: 1.2,
        },
    },
];

/// Returns the ids of all monitored stations in registry order.
pub fn all_location_ids() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.id).collect()
}

/// Looks up a station by id. Returns `None` if not found.
pub fn find_station(id: &str) -> Option<&'static Station> {
    STATION_REGISTRY.iter().find(|s| s.id == id)
}

/// Stations within a coastal region, e.g. "Kerala".
pub fn stations_in_region(region: &str) -> Vec<&'static Station> {
    STATION_REGISTRY
        .iter()
        .filter(|s| s.region.eq_ignore_ascii_case(region))
        .collect()
}

impl Station {
    /// The station's baseline conditions as a wire-shaped reading.
    pub fn baseline_reading(&self) -> LocationReading {
        LocationReading {
            id: self.id.to_string(),
            name: self.name.to_string(),
            lat: self.latitude,
            lng: self.longitude,
            wave_height: self.baseline.wave_height_m,
            wind_speed: self.baseline.wind_speed_kph,
            sea_temperature: self.baseline.sea_temperature_c,
            visibility: self.baseline.visibility_nm,
            pressure: self.baseline.pressure_hpa,
            humidity: self.baseline.humidity_pct,
            tide: self.baseline.tide_m,
            wind_direction: 0.0,
            wave_direction: 0.0,
            sunrise: Some(self.sunrise.to_string()),
            sunset: Some(self.sunset.to_string()),
            advisory: String::new(),
            aqi: None,
            alerts: Vec::new(),
            forecast: Vec::new(),
        }
    }
}

/// Baseline reading for a station id. Returns `None` if not found.
pub fn baseline_reading(id: &str) -> Option<LocationReading> {
    find_station(id).map(Station::baseline_reading)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::status::classify;
    use crate::model::SafetyStatus;

    #[test]
    fn test_all_ids_are_lowercase_slugs() {
        for station in STATION_REGISTRY {
            assert!(
                !station.id.is_empty()
                    && station.id.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "id for '{}' should be a lowercase slug, got '{}'",
                station.name,
                station.id
            );
        }
    }

    #[test]
    fn test_no_duplicate_ids() {
        let mut seen = std::collections::HashSet::new();
        for station in STATION_REGISTRY {
            assert!(
                seen.insert(station.id),
                "duplicate id '{}' found in STATION_REGISTRY",
                station.id
            );
        }
    }

    #[test]
    fn test_coordinates_are_within_indian_coastal_bounds() {
        for station in STATION_REGISTRY {
            assert!(
                (6.0..=24.0).contains(&station.latitude),
                "latitude out of range for '{}'",
                station.name
            );
            assert!(
                (68.0..=94.0).contains(&station.longitude),
                "longitude out of range for '{}'",
                station.name
            );
        }
    }

    #[test]
    fn test_every_baseline_passes_validation() {
        for station in STATION_REGISTRY {
            let reading = station.baseline_reading();
            assert_eq!(
                reading.validate(),
                Ok(()),
                "baseline for '{}' should validate",
                station.name
            );
        }
    }

    #[test]
    fn test_find_station_returns_correct_entry() {
        let station = find_station("visakhapatnam").expect("Visakhapatnam should be in registry");
        assert_eq!(station.name, "Visakhapatnam");
        assert_eq!(station.region, "Andhra Pradesh");
    }

    #[test]
    fn test_find_station_returns_none_for_unknown_id() {
        assert!(find_station("atlantis").is_none());
        assert!(baseline_reading("atlantis").is_none());
    }

    #[test]
    fn test_all_location_ids_matches_registry_length() {
        assert_eq!(all_location_ids().len(), STATION_REGISTRY.len());
    }

    #[test]
    fn test_stations_in_region_is_case_insensitive() {
        let kerala = stations_in_region("kerala");
        let ids: Vec<_> = kerala.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["kasaragod", "kannur", "kozhikode", "kochi", "alappuzha", "kollam", "thiruvananthapuram"]
        );
    }

    #[test]
    fn test_registry_lists_every_coastal_harbor() {
        assert_eq!(STATION_REGISTRY.len(), 63);
        for id in ["okha", "dwarka", "diu", "alibag", "malvan", "nagapattinam", "gopalpur", "portblair"] {
            assert!(find_station(id).is_some(), "'{}' should be in the registry", id);
        }
        assert_eq!(stations_in_region("Lakshadweep").len(), 2);
        assert_eq!(stations_in_region("Andaman & Nicobar").len(), 2);
    }

    #[test]
    fn test_registry_covers_every_status_tier() {
        // The mock dataset should exercise all three tiers so the dashboard
        // is testable offline.
        let statuses: std::collections::HashSet<_> = STATION_REGISTRY
            .iter()
            .map(|s| classify(&s.baseline_reading()).status)
            .collect();
        assert!(statuses.contains(&SafetyStatus::SafeToGo));
        assert!(statuses.contains(&SafetyStatus::Caution));
        assert!(statuses.contains(&SafetyStatus::DoNotGo));
    }
}
