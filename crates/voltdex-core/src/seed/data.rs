//! Built-in dataset
//!
//! Packs and links refer to other rows by 1-based position in these arrays,
//! not by id; `seed` maps positions to the ids the store assigns.

/// (manufacturer, model, chemistry, nominal voltage, nominal capacity mAh)
pub type CellRow = (&'static str, &'static str, &'static str, Option<f64>, Option<i64>);

/// (brand, model, trim, year start, year end)
pub type CarRow = (
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<i64>,
    Option<i64>,
);

/// (name, kWh, series, parallel, cells, cell model position)
pub type PackRow = (
    &'static str,
    Option<f64>,
    Option<i64>,
    Option<i64>,
    Option<i64>,
    Option<usize>,
);

/// (car position, pack position)
pub type LinkRow = (usize, usize);

pub const CELL_MODELS: [CellRow; 22] = [
    ("Panasonic", "NCR18650B", "Li-ION", Some(3.6), Some(3400)),
    ("Panasonic", "NCR18650GA", "Li-ION", Some(3.6), Some(3450)),
    ("Panasonic", "NCR21700A", "Li-ION", Some(3.6), Some(4800)),
    ("Tesla", "4680", "Li-ION", Some(3.6), Some(23000)),
    ("LG Chem", "INR18650 MJ1", "Li-ION", Some(3.635), Some(3500)),
    ("LG Chem", "E63 pouch", "Li-ION", Some(3.65), Some(63000)),
    ("LG Chem", "E78 pouch", "Li-ION", Some(3.65), Some(78000)),
    ("Samsung SDI", "94Ah prismatic", "Li-ION", Some(3.68), Some(94000)),
    ("Samsung SDI", "120Ah prismatic", "Li-ION", Some(3.68), Some(120000)),
    ("CATL", "NCM 161Ah prismatic", "Li-ION", Some(3.65), Some(161000)),
    ("CATL", "LFP 161Ah prismatic", "LiFePO4", Some(3.2), Some(161000)),
    ("BYD", "Blade", "LiFePO4", Some(3.2), Some(138000)),
    ("AESC", "Gen1 33Ah pouch", "Li-ION", Some(3.75), Some(33100)),
    ("AESC", "Gen2 56Ah pouch", "Li-ION", Some(3.65), Some(56300)),
    ("SK On", "NCM622 pouch", "Li-ION", Some(3.65), Some(60000)),
    ("Panasonic", "EV-95 prismatic", "Ni-MH", Some(1.2), Some(6500)),
    ("Primearth EV Energy", "Gen3 prismatic", "Ni-MH", Some(1.2), Some(6500)),
    ("Sanyo", "HF-D cylindrical", "Ni-MH", Some(1.2), Some(6500)),
    ("Toshiba", "SCiB 20Ah", "LTO", Some(2.3), Some(20000)),
    ("Lithium Energy Japan", "LEV50", "Li-ION", Some(3.7), Some(50000)),
    ("Samsung SDI", "INR21700-50E", "Li-ION", Some(3.6), Some(5000)),
    ("Farasis", "73Ah pouch", "Li-ION", Some(3.65), Some(73000)),
];

pub const CARS: [CarRow; 28] = [
    ("Tesla", "Model S", Some("85"), Some(2012), Some(2015)),
    ("Tesla", "Model S", Some("Long Range"), Some(2019), None),
    ("Tesla", "Model 3", Some("Standard Range Plus"), Some(2019), Some(2020)),
    ("Tesla", "Model 3", Some("Long Range"), Some(2017), None),
    ("Tesla", "Model Y", Some("Long Range"), Some(2020), None),
    ("Nissan", "Leaf", Some("24 kWh"), Some(2010), Some(2015)),
    ("Nissan", "Leaf", Some("40 kWh"), Some(2018), None),
    ("Nissan", "Leaf", Some("e+"), Some(2019), None),
    ("Chevrolet", "Bolt EV", None, Some(2017), Some(2023)),
    ("Chevrolet", "Volt", None, Some(2011), Some(2015)),
    ("BMW", "i3", Some("94 Ah"), Some(2016), Some(2018)),
    ("BMW", "i3", Some("120 Ah"), Some(2019), Some(2022)),
    ("Hyundai", "Kona Electric", Some("64 kWh"), Some(2018), None),
    ("Kia", "e-Niro", Some("64 kWh"), Some(2018), None),
    ("Volkswagen", "ID.3", Some("Pro"), Some(2020), None),
    ("Volkswagen", "e-Golf", None, Some(2017), Some(2020)),
    ("Renault", "Zoe", Some("ZE50"), Some(2019), None),
    ("Toyota", "Prius", Some("Gen 2"), Some(2003), Some(2009)),
    ("Toyota", "Prius", Some("Gen 3"), Some(2009), Some(2015)),
    ("Honda", "Insight", Some("Gen 1"), Some(1999), Some(2006)),
    ("Mitsubishi", "i-MiEV", None, Some(2009), Some(2021)),
    ("Ford", "Mustang Mach-E", Some("Extended Range"), Some(2021), None),
    ("Porsche", "Taycan", Some("Performance Battery Plus"), Some(2019), None),
    ("Audi", "e-tron GT", Some("quattro"), Some(2021), None),
    ("BYD", "Han EV", None, Some(2020), None),
    ("BYD", "Atto 3", None, Some(2022), None),
    ("Jaguar", "I-Pace", Some("EV400"), Some(2018), None),
    ("Volkswagen", "ID.4", Some("Pro"), Some(2021), None),
];

pub const BATTERY_PACKS: [PackRow; 21] = [
    ("Tesla 85 kWh", Some(85.0), Some(96), Some(74), Some(7104), Some(1)),
    ("Tesla 2170 Long Range", Some(75.0), Some(96), Some(46), Some(4416), Some(3)),
    ("Tesla 4680 structural", Some(81.0), None, None, Some(828), Some(4)),
    ("Nissan 24 kWh", Some(24.0), Some(96), Some(2), Some(192), Some(13)),
    ("Nissan 40 kWh", Some(40.0), Some(96), Some(2), Some(192), Some(14)),
    ("Nissan 62 kWh", Some(62.0), Some(96), Some(3), Some(288), Some(14)),
    ("Chevrolet Bolt 60 kWh", Some(60.0), Some(96), Some(3), Some(288), Some(6)),
    ("Chevrolet Volt 16 kWh", Some(16.0), Some(96), Some(3), Some(288), None),
    ("BMW i3 33 kWh", Some(33.2), Some(96), Some(1), Some(96), Some(8)),
    ("BMW i3 42 kWh", Some(42.2), Some(96), Some(1), Some(96), Some(9)),
    ("Hyundai-Kia 64 kWh", Some(64.0), Some(98), Some(3), Some(294), Some(15)),
    ("VW MEB 58 kWh", Some(58.0), Some(96), Some(3), Some(288), Some(7)),
    ("VW e-Golf 35.8 kWh", Some(35.8), Some(88), Some(3), Some(264), None),
    ("Renault ZE50 52 kWh", Some(52.0), Some(96), Some(2), Some(192), Some(7)),
    ("Toyota Prius Gen 2 NiMH", Some(1.31), Some(168), Some(1), Some(168), Some(16)),
    ("Toyota Prius Gen 3 NiMH", Some(1.31), Some(168), Some(1), Some(168), Some(17)),
    ("Honda IMA NiMH", Some(0.94), Some(120), Some(1), Some(120), Some(18)),
    ("Mitsubishi i-MiEV 16 kWh", Some(16.0), Some(88), Some(1), Some(88), Some(20)),
    ("Ford Mach-E 88 kWh", Some(88.0), Some(96), Some(4), Some(384), Some(7)),
    ("Porsche PB+ 93.4 kWh", Some(93.4), Some(198), Some(2), Some(396), Some(7)),
    ("BYD Blade 60.48 kWh", Some(60.48), Some(126), Some(1), Some(126), Some(12)),
];

pub const CAR_BATTERY_PACKS: [LinkRow; 28] = [
    (1, 1),
    (2, 1),
    (3, 2),
    (4, 2),
    (5, 2),
    (5, 3),
    (6, 4),
    (7, 5),
    (8, 6),
    (9, 7),
    (10, 8),
    (11, 9),
    (12, 10),
    (13, 11),
    (14, 11),
    (15, 12),
    (16, 13),
    (17, 14),
    (18, 15),
    (19, 16),
    (20, 17),
    (21, 18),
    (22, 19),
    (23, 20),
    (24, 20),
    (25, 21),
    (26, 21),
    (28, 12),
];
