//! The built-in emoji table.
//!
//! One row per emoji: `(name, category, display code, sort order)`. The
//! display code is the decimal code point sequence, dash-separated for
//! multi-scalar emoji (regional-indicator flags). Sort orders are spaced by
//! ten so new rows can slot in without renumbering.

use crate::category::Category;

/// Raw catalog rows, in tab order.
pub(crate) static ROWS: &[(&str, Category, &str, u32)] = &[
    // -- People ----------------------------------------------------------------
    ("grinning", Category::People, "128512", 10),
    ("smiley", Category::People, "128515", 20),
    ("smile", Category::People, "128516", 30),
    ("grin", Category::People, "128513", 40),
    ("laughing", Category::People, "128518", 50),
    ("sweat_smile", Category::People, "128517", 60),
    ("joy", Category::People, "128514", 70),
    ("rofl", Category::People, "129315", 80),
    ("relaxed", Category::People, "9786", 90),
    ("blush", Category::People, "128522", 100),
    ("innocent", Category::People, "128519", 110),
    ("slight_smile", Category::People, "128578", 120),
    ("upside_down", Category::People, "128579", 130),
    ("wink", Category::People, "128521", 140),
    ("relieved", Category::People, "128524", 150),
    ("heart_eyes", Category::People, "128525", 160),
    ("kissing_heart", Category::People, "128536", 170),
    ("kissing", Category::People, "128535", 180),
    ("yum", Category::People, "128523", 190),
    ("stuck_out_tongue", Category::People, "128539", 200),
    ("stuck_out_tongue_winking_eye", Category::People, "128540", 210),
    ("nerd", Category::People, "129299", 220),
    ("sunglasses", Category::People, "128526", 230),
    ("smirk", Category::People, "128527", 240),
    ("unamused", Category::People, "128530", 250),
    ("disappointed", Category::People, "128542", 260),
    ("pensive", Category::People, "128532", 270),
    ("worried", Category::People, "128543", 280),
    ("confused", Category::People, "128533", 290),
    ("cry", Category::People, "128546", 300),
    ("sob", Category::People, "128557", 310),
    ("angry", Category::People, "128544", 320),
    ("rage", Category::People, "128545", 330),
    ("scream", Category::People, "128561", 340),
    ("flushed", Category::People, "128563", 350),
    ("sleeping", Category::People, "128564", 360),
    ("thinking", Category::People, "129300", 370),
    ("thumbsup", Category::People, "128077", 380),
    ("thumbsdown", Category::People, "128078", 390),
    ("clap", Category::People, "128079", 400),
    ("wave", Category::People, "128075", 410),
    ("ok_hand", Category::People, "128076", 420),
    ("pray", Category::People, "128591", 430),
    ("muscle", Category::People, "128170", 440),
    ("eyes", Category::People, "128064", 450),
    ("baby", Category::People, "128118", 460),
    ("boy", Category::People, "128102", 470),
    ("girl", Category::People, "128103", 480),
    ("man", Category::People, "128104", 490),
    ("woman", Category::People, "128105", 500),
    // -- Nature ----------------------------------------------------------------
    ("dog", Category::Nature, "128054", 510),
    ("cat", Category::Nature, "128049", 520),
    ("mouse", Category::Nature, "128045", 530),
    ("hamster", Category::Nature, "128057", 540),
    ("rabbit", Category::Nature, "128048", 550),
    ("fox", Category::Nature, "129418", 560),
    ("bear", Category::Nature, "128059", 570),
    ("panda_face", Category::Nature, "128060", 580),
    ("koala", Category::Nature, "128040", 590),
    ("tiger", Category::Nature, "128047", 600),
    ("lion_face", Category::Nature, "129409", 610),
    ("cow", Category::Nature, "128046", 620),
    ("pig", Category::Nature, "128055", 630),
    ("frog", Category::Nature, "128056", 640),
    ("monkey_face", Category::Nature, "128053", 650),
    ("chicken", Category::Nature, "128020", 660),
    ("penguin", Category::Nature, "128039", 670),
    ("bird", Category::Nature, "128038", 680),
    ("wolf", Category::Nature, "128058", 690),
    ("horse", Category::Nature, "128052", 700),
    ("unicorn", Category::Nature, "129412", 710),
    ("bee", Category::Nature, "128029", 720),
    ("bug", Category::Nature, "128027", 730),
    ("snail", Category::Nature, "128012", 740),
    ("turtle", Category::Nature, "128034", 750),
    ("snake", Category::Nature, "128013", 760),
    ("octopus", Category::Nature, "128025", 770),
    ("whale", Category::Nature, "128051", 780),
    ("dolphin", Category::Nature, "128044", 790),
    ("fish", Category::Nature, "128031", 800),
    ("cactus", Category::Nature, "127797", 810),
    ("evergreen_tree", Category::Nature, "127794", 820),
    ("deciduous_tree", Category::Nature, "127795", 830),
    ("palm_tree", Category::Nature, "127796", 840),
    ("seedling", Category::Nature, "127793", 850),
    ("four_leaf_clover", Category::Nature, "127808", 860),
    ("maple_leaf", Category::Nature, "127809", 870),
    ("mushroom", Category::Nature, "127812", 880),
    ("sunflower", Category::Nature, "127803", 890),
    ("rose", Category::Nature, "127801", 900),
    ("tulip", Category::Nature, "127799", 910),
    ("cherry_blossom", Category::Nature, "127800", 920),
    ("sunny", Category::Nature, "9728", 930),
    ("cloud", Category::Nature, "9729", 940),
    ("snowflake", Category::Nature, "10052", 950),
    ("rainbow", Category::Nature, "127752", 960),
    ("zap", Category::Nature, "9889", 970),
    ("droplet", Category::Nature, "128167", 980),
    // -- Food ------------------------------------------------------------------
    ("apple", Category::Food, "127822", 990),
    ("green_apple", Category::Food, "127823", 1000),
    ("pear", Category::Food, "127824", 1010),
    ("tangerine", Category::Food, "127818", 1020),
    ("lemon", Category::Food, "127819", 1030),
    ("banana", Category::Food, "127820", 1040),
    ("watermelon", Category::Food, "127817", 1050),
    ("grapes", Category::Food, "127815", 1060),
    ("strawberry", Category::Food, "127827", 1070),
    ("cherries", Category::Food, "127826", 1080),
    ("peach", Category::Food, "127825", 1090),
    ("pineapple", Category::Food, "127821", 1100),
    ("tomato", Category::Food, "127813", 1110),
    ("eggplant", Category::Food, "127814", 1120),
    ("corn", Category::Food, "127805", 1130),
    ("bread", Category::Food, "127838", 1140),
    ("cheese", Category::Food, "129472", 1150),
    ("egg", Category::Food, "129370", 1160),
    ("hamburger", Category::Food, "127828", 1170),
    ("fries", Category::Food, "127839", 1180),
    ("pizza", Category::Food, "127829", 1190),
    ("hotdog", Category::Food, "127789", 1200),
    ("taco", Category::Food, "127790", 1210),
    ("burrito", Category::Food, "127791", 1220),
    ("spaghetti", Category::Food, "127837", 1230),
    ("ramen", Category::Food, "127836", 1240),
    ("sushi", Category::Food, "127843", 1250),
    ("rice", Category::Food, "127834", 1260),
    ("cake", Category::Food, "127856", 1270),
    ("birthday", Category::Food, "127874", 1280),
    ("cookie", Category::Food, "127850", 1290),
    ("chocolate_bar", Category::Food, "127851", 1300),
    ("candy", Category::Food, "127852", 1310),
    ("doughnut", Category::Food, "127849", 1320),
    ("icecream", Category::Food, "127846", 1330),
    ("coffee", Category::Food, "9749", 1340),
    ("tea", Category::Food, "127861", 1350),
    ("beer", Category::Food, "127866", 1360),
    ("wine_glass", Category::Food, "127863", 1370),
    ("cocktail", Category::Food, "127864", 1380),
    // -- Symbols ---------------------------------------------------------------
    ("heart", Category::Symbols, "10084", 1390),
    ("yellow_heart", Category::Symbols, "128155", 1400),
    ("green_heart", Category::Symbols, "128154", 1410),
    ("blue_heart", Category::Symbols, "128153", 1420),
    ("purple_heart", Category::Symbols, "128156", 1430),
    ("broken_heart", Category::Symbols, "128148", 1440),
    ("sparkling_heart", Category::Symbols, "128150", 1450),
    ("two_hearts", Category::Symbols, "128149", 1460),
    ("star", Category::Symbols, "11088", 1470),
    ("sparkles", Category::Symbols, "10024", 1480),
    ("fire", Category::Symbols, "128293", 1490),
    ("boom", Category::Symbols, "128165", 1500),
    ("100", Category::Symbols, "128175", 1510),
    ("heavy_check_mark", Category::Symbols, "10004", 1520),
    ("white_check_mark", Category::Symbols, "9989", 1530),
    ("x", Category::Symbols, "10060", 1540),
    ("warning", Category::Symbols, "9888", 1550),
    ("question", Category::Symbols, "10067", 1560),
    ("exclamation", Category::Symbols, "10071", 1570),
    ("no_entry", Category::Symbols, "9940", 1580),
    ("recycle", Category::Symbols, "9851", 1590),
    ("infinity", Category::Symbols, "9854", 1600),
    ("peace", Category::Symbols, "9774", 1610),
    ("yin_yang", Category::Symbols, "9775", 1620),
    ("arrow_up", Category::Symbols, "11014", 1630),
    ("arrow_down", Category::Symbols, "11015", 1640),
    ("arrow_left", Category::Symbols, "11013", 1650),
    ("arrow_right", Category::Symbols, "10145", 1660),
    ("heavy_plus_sign", Category::Symbols, "10133", 1670),
    ("heavy_minus_sign", Category::Symbols, "10134", 1680),
    ("red_circle", Category::Symbols, "128308", 1690),
    ("large_blue_circle", Category::Symbols, "128309", 1700),
    ("copyright", Category::Symbols, "169", 1710),
    ("registered", Category::Symbols, "174", 1720),
    ("tm", Category::Symbols, "8482", 1730),
    // -- Activity --------------------------------------------------------------
    ("soccer", Category::Activity, "9917", 1740),
    ("basketball", Category::Activity, "127936", 1750),
    ("football", Category::Activity, "127944", 1760),
    ("baseball", Category::Activity, "9918", 1770),
    ("tennis", Category::Activity, "127934", 1780),
    ("volleyball", Category::Activity, "127952", 1790),
    ("rugby_football", Category::Activity, "127945", 1800),
    ("8ball", Category::Activity, "127921", 1810),
    ("golf", Category::Activity, "9971", 1820),
    ("ping_pong", Category::Activity, "127955", 1830),
    ("badminton", Category::Activity, "127992", 1840),
    ("ice_skate", Category::Activity, "9976", 1850),
    ("ski", Category::Activity, "127935", 1860),
    ("trophy", Category::Activity, "127942", 1870),
    ("medal", Category::Activity, "127941", 1880),
    ("first_place", Category::Activity, "129351", 1890),
    ("dart", Category::Activity, "127919", 1900),
    ("bowling", Category::Activity, "127923", 1910),
    ("video_game", Category::Activity, "127918", 1920),
    ("game_die", Category::Activity, "127922", 1930),
    ("chess_pawn", Category::Activity, "9823", 1940),
    ("guitar", Category::Activity, "127928", 1950),
    ("musical_keyboard", Category::Activity, "127929", 1960),
    ("trumpet", Category::Activity, "127930", 1970),
    ("violin", Category::Activity, "127931", 1980),
    ("drum", Category::Activity, "129345", 1990),
    ("microphone", Category::Activity, "127908", 2000),
    ("headphones", Category::Activity, "127911", 2010),
    ("art", Category::Activity, "127912", 2020),
    ("performing_arts", Category::Activity, "127917", 2030),
    ("tickets", Category::Activity, "127903", 2040),
    ("circus_tent", Category::Activity, "127914", 2050),
    // -- Travel ----------------------------------------------------------------
    ("red_car", Category::Travel, "128663", 2060),
    ("taxi", Category::Travel, "128661", 2070),
    ("bus", Category::Travel, "128652", 2080),
    ("ambulance", Category::Travel, "128657", 2090),
    ("fire_engine", Category::Travel, "128658", 2100),
    ("police_car", Category::Travel, "128659", 2110),
    ("truck", Category::Travel, "128666", 2120),
    ("bike", Category::Travel, "128690", 2130),
    ("motorcycle", Category::Travel, "127949", 2140),
    ("train", Category::Travel, "128646", 2150),
    ("bullettrain_side", Category::Travel, "128644", 2160),
    ("metro", Category::Travel, "128647", 2170),
    ("airplane", Category::Travel, "9992", 2180),
    ("rocket", Category::Travel, "128640", 2190),
    ("helicopter", Category::Travel, "128641", 2200),
    ("ship", Category::Travel, "128674", 2210),
    ("sailboat", Category::Travel, "9973", 2220),
    ("anchor", Category::Travel, "9875", 2230),
    ("fuelpump", Category::Travel, "9981", 2240),
    ("construction", Category::Travel, "128679", 2250),
    ("vertical_traffic_light", Category::Travel, "128678", 2260),
    ("statue_of_liberty", Category::Travel, "128509", 2270),
    ("tokyo_tower", Category::Travel, "128508", 2280),
    ("mount_fuji", Category::Travel, "128507", 2290),
    ("volcano", Category::Travel, "127755", 2300),
    ("house", Category::Travel, "127968", 2310),
    ("office", Category::Travel, "127970", 2320),
    ("hospital", Category::Travel, "127973", 2330),
    ("school", Category::Travel, "127979", 2340),
    ("church", Category::Travel, "9962", 2350),
    ("tent", Category::Travel, "9978", 2360),
    ("ferris_wheel", Category::Travel, "127905", 2370),
    ("roller_coaster", Category::Travel, "127906", 2380),
    ("beach_umbrella", Category::Travel, "127958", 2390),
    ("earth_africa", Category::Travel, "127757", 2400),
    ("world_map", Category::Travel, "128506", 2410),
    // -- Objects ---------------------------------------------------------------
    ("watch", Category::Objects, "8986", 2420),
    ("iphone", Category::Objects, "128241", 2430),
    ("computer", Category::Objects, "128187", 2440),
    ("keyboard", Category::Objects, "9000", 2450),
    ("desktop", Category::Objects, "128421", 2460),
    ("printer", Category::Objects, "128424", 2470),
    ("camera", Category::Objects, "128247", 2480),
    ("tv", Category::Objects, "128250", 2490),
    ("radio", Category::Objects, "128251", 2500),
    ("telephone", Category::Objects, "9742", 2510),
    ("battery", Category::Objects, "128267", 2520),
    ("bulb", Category::Objects, "128161", 2530),
    ("flashlight", Category::Objects, "128294", 2540),
    ("candle", Category::Objects, "128367", 2550),
    ("moneybag", Category::Objects, "128176", 2560),
    ("gem", Category::Objects, "128142", 2570),
    ("wrench", Category::Objects, "128295", 2580),
    ("hammer", Category::Objects, "128296", 2590),
    ("gear", Category::Objects, "9881", 2600),
    ("lock", Category::Objects, "128274", 2610),
    ("key", Category::Objects, "128273", 2620),
    ("bell", Category::Objects, "128276", 2630),
    ("gift", Category::Objects, "127873", 2640),
    ("balloon", Category::Objects, "127880", 2650),
    ("tada", Category::Objects, "127881", 2660),
    ("envelope", Category::Objects, "9993", 2670),
    ("pencil2", Category::Objects, "9999", 2680),
    ("memo", Category::Objects, "128221", 2690),
    ("book", Category::Objects, "128214", 2700),
    ("books", Category::Objects, "128218", 2710),
    ("paperclip", Category::Objects, "128206", 2720),
    ("scissors", Category::Objects, "9986", 2730),
    ("pushpin", Category::Objects, "128204", 2740),
    ("calendar", Category::Objects, "128197", 2750),
    ("hourglass", Category::Objects, "8987", 2760),
    ("alarm_clock", Category::Objects, "9200", 2770),
    ("pill", Category::Objects, "128138", 2780),
    ("syringe", Category::Objects, "128137", 2790),
    ("umbrella", Category::Objects, "9730", 2800),
    ("shopping_cart", Category::Objects, "128722", 2810),
    // -- Flags -----------------------------------------------------------------
    ("flag_us", Category::Flags, "127482-127480", 2820),
    ("flag_gb", Category::Flags, "127468-127463", 2830),
    ("flag_fr", Category::Flags, "127467-127479", 2840),
    ("flag_de", Category::Flags, "127465-127466", 2850),
    ("flag_it", Category::Flags, "127470-127481", 2860),
    ("flag_es", Category::Flags, "127466-127480", 2870),
    ("flag_jp", Category::Flags, "127471-127477", 2880),
    ("flag_kr", Category::Flags, "127472-127479", 2890),
    ("flag_cn", Category::Flags, "127464-127475", 2900),
    ("flag_in", Category::Flags, "127470-127475", 2910),
    ("flag_br", Category::Flags, "127463-127479", 2920),
    ("flag_ca", Category::Flags, "127464-127462", 2930),
    ("flag_mx", Category::Flags, "127474-127485", 2940),
    ("flag_au", Category::Flags, "127462-127482", 2950),
    ("flag_ru", Category::Flags, "127479-127482", 2960),
    ("flag_se", Category::Flags, "127480-127466", 2970),
    ("flag_no", Category::Flags, "127475-127476", 2980),
    ("flag_nl", Category::Flags, "127475-127473", 2990),
    ("flag_ch", Category::Flags, "127464-127469", 3000),
    ("flag_ie", Category::Flags, "127470-127466", 3010),
    ("flag_pt", Category::Flags, "127477-127481", 3020),
    ("flag_ar", Category::Flags, "127462-127479", 3030),
    ("flag_za", Category::Flags, "127487-127462", 3040),
    ("checkered_flag", Category::Flags, "127937", 3050),
    ("white_flag", Category::Flags, "127987", 3060),
    ("black_flag", Category::Flags, "127988", 3070),
    ("triangular_flag_on_post", Category::Flags, "128681", 3080),
    ("crossed_flags", Category::Flags, "127884", 3090),
];
