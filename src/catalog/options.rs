//! Option tables for every selectable category.
//!
//! Values are display strings sent verbatim to the refinement call; the
//! compositor never re-keys them.

pub(super) static PERSPECTIVE: &[&str] = &[
    "Front view",
    "Side profile",
    "Three-quarter view",
    "Back view",
    "Eye level",
    "Low angle/Worm's eye view",
    "High angle",
    "Extreme low angle",
    "Extreme high angle/Bird's eye view",
    "Dutch angle/Canted angle",
    "Aerial/Drone shot",
    "Overhead/Top-down",
    "Underside/Worm's eye",
    "Extreme close-up (ECU)",
    "Close-up (CU)",
    "Medium close-up (MCU)",
    "Medium shot (MS)",
    "Medium long shot (MLS)",
    "Wide shot/Long shot",
    "Extreme wide shot (EWS)",
    "Establishing shot",
    "Over-the-shoulder (OTS)",
    "Point of view (POV)",
    "Two shot",
    "Three shot",
    "Group shot",
    "Insert shot/Cutaway",
    "Panoramic view",
    "Fisheye perspective",
    "Split screen",
    "Reflection shot",
    "Silhouette view",
];

pub(super) static ART_STYLE: &[&str] = &[
    "Photorealistic",
    "Hyperrealistic",
    "Cinematic photorealistic",
    "Documentary style",
    "Editorial photography",
    "Fashion photography",
    "Oil painting",
    "Impasto (thick paint)",
    "Watercolor",
    "Gouache",
    "Acrylic painting",
    "Tempera",
    "Encaustic (wax)",
    "Pencil sketch",
    "Charcoal drawing",
    "Pastel/Chalk",
    "Ink wash/Sumi-e",
    "Cross-hatching",
    "Stipple art",
    "Woodcut print",
    "Etching/Engraving",
    "Lithograph",
    "Screen print/Pop art",
    "Linocut",
    "Digital Art",
    "Digital painting",
    "Concept art",
    "Matte painting",
    "Pixel art",
    "Voxel art",
    "Vector/Flat design",
    "Low poly 3D",
    "Isometric art",
    "Anime style",
    "Manga style",
    "Chibi/Cute style",
    "Shoujo style",
    "Shounen style",
    "Studio Ghibli style",
    "Mecha style",
    "Cartoon style",
    "Caricature",
    "Storybook illustration",
    "Children's book illustration",
    "Comic book style",
    "Graphic novel",
    "Renaissance style",
    "Baroque style",
    "Rococo style",
    "Neoclassical",
    "Romanticism",
    "Impressionism",
    "Post-Impressionism",
    "Expressionism",
    "Art Nouveau",
    "Art Deco",
    "Cubism",
    "Surrealism",
    "Abstract art",
    "Dada style",
    "Bauhaus style",
    "Pop Art",
    "Op Art",
    "Minimalism art",
    "Ukiyo-e (Japanese woodblock)",
    "Chinese ink painting",
    "Indian miniature painting",
    "Persian miniature",
    "Byzantine/Mosaic style",
    "Celtic art",
    "African tribal art",
    "Pre-Columbian style",
    "Fantasy art",
    "Science fiction",
    "Steampunk",
    "Cyberpunk",
    "Biopunk",
    "Atompunk",
    "Dieselpunk",
    "Solarpunk",
    "Vaporwave",
    "Retrowave",
    "Dark fantasy",
    "Gothic style",
    "Film Noir",
    "Horror art",
    "Macabre style",
    "Vintage/Retro",
    "80s retro style",
    "90s retro style",
    "Victorian era style",
    "Mid-century modern",
    "Collage art",
    "Photomontage",
    "Mixed media",
    "Textile art",
    "Paper cut art",
    "Quilling art",
];

pub(super) static COLOR_PALETTE: &[&str] = &[
    "Monochrome",
    "Monochrome warm (sepia tones)",
    "Monochrome cool (blue tones)",
    "Black and white",
    "High contrast B&W",
    "Low contrast B&W",
    "Duotone",
    "Earth tones (browns, ochres)",
    "Desert palette (warm, sandy)",
    "Forest palette (greens, browns)",
    "Cool blues",
    "Teal and orange (blockbuster)",
    "Cyan and magenta",
    "Warm ambers/oranges",
    "Red and crimson",
    "Golden hour palette",
    "Vibrant primaries",
    "Neon accent colors",
    "Rainbow/Multi-colored",
    "Pastel soft colors",
    "Vintage faded",
    "Cross-processed look",
    "Infrared palette",
    "Bleach bypass look",
    "Matte/low contrast",
    "Highly saturated",
    "Desaturated/muted",
    "Cinematic orange-teal",
    "Wong Kar-wai style colors",
    "David Fincher desaturated",
    "Spielberg amber warmth",
    "Red dominant",
    "Blue dominant",
    "Green dominant",
    "Purple dominant",
    "Yellow dominant",
];

pub(super) static TEXTURE: &[&str] = &[
    "Smooth/Polished",
    "Glossy/Shiny",
    "Matte/Dull",
    "Rough/Textured",
    "Grainy/Noisy",
    "Gritty/Distressed",
    "Weathered/Aged",
    "Rustic/Raw",
    "Metallic/Chrome",
    "Glassy/Transparent",
    "Frosted/Diffused",
    "Woven/Fabric",
    "Knitted/Crocheted",
    "Leather/Suede",
    "Wood grain",
    "Stone/Rock",
    "Concrete/Cement",
    "Brick/Masonry",
    "Paper/Cardboard",
    "Canvas texture",
    "Marble/Stone polished",
    "Crystalline/Faceted",
    "Liquid/Fluid",
    "Smoke/Mist texture",
    "Cloud/Soft texture",
    "Feather/Downy",
    "Fur/Hairy",
    "Scales/Reptilian",
    "Tree bark",
    "Sand/Granular",
    "Ice/Frozen texture",
];

pub(super) static ERA: &[&str] = &[
    "Ancient/Classical",
    "Medieval/Middle Ages",
    "Renaissance period",
    "Baroque period",
    "Victorian era (1837-1901)",
    "Edwardian era (1901-1910)",
    "1920s/Roaring Twenties",
    "1930s/Depression era",
    "1940s/WWII era",
    "1950s/Mid-century",
    "1960s/Swinging Sixties",
    "1970s/Disc era",
    "1980s/Neon era",
    "1990s/Grunge era",
    "2000s/Y2K era",
    "2010s/Modern",
    "Futuristic/Sci-fi",
    "Post-apocalyptic",
    "Steampunk alternate history",
    "Atompunk 1950s sci-fi",
    "Cyberpunk near-future",
    "Solarpunk eco-future",
];

pub(super) static CAMERA: &[&str] = &[
    "DSLR",
    "Mirrorless",
    "Point & Shoot",
    "Rangefinder",
    "Medium Format",
    "Large Format",
    "Instant Camera",
    "Action Camera",
    "Vintage/Retro Camera",
];

pub(super) static LENS_TYPE: &[&str] = &[
    "Prime Lens",
    "Zoom Lens",
    "Macro Lens",
    "Tilt-Shift Lens",
    "Fisheye Lens",
    "Anamorphic Lens",
    "Vintage Lens",
    "Soft Focus Lens",
];

pub(super) static FOCAL_LENGTH: &[&str] = &[
    "14mm Ultra-wide",
    "24mm Wide-angle",
    "35mm Street",
    "50mm Standard",
    "85mm Portrait",
    "200mm Telephoto",
];

pub(super) static APERTURE: &[&str] = &[
    "f/1.2 (extreme bokeh)",
    "f/1.4 (very shallow)",
    "f/1.8 (portrait)",
    "f/2.8 (standard fast)",
    "f/4 (light bokeh)",
    "f/5.6 (group shots)",
    "f/8 (sharp overall)",
    "f/11 (landscape)",
    "f/16 (maximum depth)",
    "f/22 (diffraction)",
];

pub(super) static SHUTTER_SPEED: &[&str] = &[
    "Bulb (long exposure)",
    "1/4000s (freeze motion)",
    "1/2000s (sports)",
    "1/1000s (action)",
    "1/500s (moving subjects)",
    "1/250s (standard)",
    "1/125s (handheld)",
    "1/60s (low light)",
    "1/30s (panning)",
    "1/15s (motion blur)",
    "1/4s (light trails)",
    "1s (night)",
];

pub(super) static ISO: &[&str] = &[
    "ISO 50 (lowest grain)",
    "ISO 100 (daylight)",
    "ISO 200 (bright indoor)",
    "ISO 400 (general)",
    "ISO 800 (low light)",
    "ISO 1600 (night)",
    "ISO 3200 (very dark)",
    "ISO 6400 (extreme)",
    "ISO 12800 (high grain)",
];

pub(super) static FILM_STOCK: &[&str] = &[
    "Kodak Portra 400",
    "Kodak Gold 200",
    "Fujifilm Pro 400H",
    "CineStill 800T",
    "Ilford HP5 (B&W)",
    "Polaroid/Instant",
    "Kodachrome",
];

pub(super) static FILM_GRAIN: &[&str] = &[
    "No grain (clean)",
    "Subtle grain",
    "Light film grain",
    "Moderate grain",
    "Heavy grain (vintage)",
    "Extreme grain (expired film)",
    "Pushed film look",
];

pub(super) static WHITE_BALANCE: &[&str] = &[
    "Auto WB",
    "Daylight (5500K)",
    "Cloudy (6500K)",
    "Shade (7500K)",
    "Tungsten (3200K)",
    "Fluorescent (4000K)",
    "Warm (golden)",
    "Cool (blue)",
];

pub(super) static FOCUS: &[&str] = &[
    "Auto Focus",
    "Manual Focus",
    "Shallow Depth of Field",
    "Deep Depth of Field",
    "Selective Focus",
    "Rack Focus",
    "Tilt-Shift Effect",
    "Pinhole/Soft Focus",
];

pub(super) static TIME_OF_DAY: &[&str] = &[
    "Deep Night (Midnight-3am)",
    "Pre-dawn/Twilight",
    "Dawn/Sunrise",
    "Early morning (6-8am)",
    "Morning (8-11am)",
    "Late morning (11am-12pm)",
    "High Noon",
    "Afternoon",
    "Late afternoon",
    "Golden Hour (sunset)",
    "Sunset",
    "Twilight/Dusk",
    "Blue Hour",
    "Evening/Nightfall",
    "Night",
];

pub(super) static WEATHER: &[&str] = &[
    "Sunny/Clear",
    "Partly cloudy",
    "Mostly cloudy",
    "Cloudy/Overcast",
    "Heavy cloud cover",
    "Light drizzle",
    "Rainy",
    "Heavy rain/Downpour",
    "Freezing rain",
    "Stormy",
    "Thunderstorm",
    "Hail storm",
    "Sand/Dust storm",
    "Light snow flurries",
    "Snowy",
    "Heavy snowfall/Blizzard",
    "Sleet",
    "Icy/Frost",
    "Foggy",
    "Misty/Hazy",
    "Smog/Polluted air",
    "Breezy",
    "Windy",
    "Strong gale",
    "Rainbow weather",
    "Aurora borealis",
    "Heat wave/Hazy",
    "Arid/Dry climate",
    "Humid/Tropical",
];

pub(super) static SEASON: &[&str] = &[
    "Spring",
    "Early spring",
    "Late spring",
    "Summer",
    "Early summer",
    "Late summer/Pre-fall",
    "Autumn/Fall",
    "Early autumn",
    "Late autumn",
    "Winter",
    "Early winter",
    "Late winter",
];

pub(super) static LOCATION: &[&str] = &[
    "City street",
    "Downtown/Urban center",
    "Suburban neighborhood",
    "Industrial area",
    "Construction site",
    "Urban park",
    "Alleyway",
    "Rooftop",
    "Interior space",
    "Exterior facade",
    "Abandoned building",
    "Historical building",
    "Modern architecture",
    "Brutalist architecture",
    "Gothic architecture",
    "Forest/Woods",
    "Rainforest/Jungle",
    "Mountain range",
    "Rolling hills",
    "Valley",
    "Canyon/Gorge",
    "Desert",
    "Beach/Coast",
    "Ocean/Sea",
    "Lake/Pond",
    "River/Stream",
    "Waterfall",
    "Wetlands/Marsh",
    "Prairie/Grassland",
    "Tundra",
    "Glacier/Ice field",
    "Cave/Underground",
    "Outer space",
    "Underwater",
    "Sky/Clouds",
    "Dreamscape/Abstract space",
];

pub(super) static MOOD: &[&str] = &[
    "Joyful/Happy",
    "Energetic/Excited",
    "Peaceful/Serene",
    "Calm/Relaxed",
    "Nostalgic/Sentimental",
    "Romantic/Tender",
    "Melancholic/Sad",
    "Lonely/Isolated",
    "Mysterious/Enigmatic",
    "Eerie/Unsettling",
    "Sinister/Menacing",
    "Tense/Suspenseful",
    "Dramatic/Intense",
    "Epic/Grandiose",
    "Hopeful/Optimistic",
    "Despair/Hopeless",
    "Wonder/Awe",
    "Chaotic/Frantic",
    "Contemplative/Pensive",
    "Whimsical/Playful",
    "Somber/Grave",
    "Ethereal/Dreamy",
    "Haunting/Ghostly",
];

pub(super) static LIGHTING: &[&str] = &[
    "Natural lighting",
    "Direct sunlight",
    "Diffused daylight",
    "Overcast/Flat light",
    "Harsh midday sun",
    "Golden hour lighting",
    "Blue hour lighting",
    "Moonlight",
    "Starlight",
    "Bioluminescent light",
    "Studio lighting",
    "Continuous lighting",
    "Strobe/Flash lighting",
    "LED lighting",
    "Tungsten/Warm artificial",
    "Fluorescent/Cool artificial",
    "Halogen lighting",
    "Candlelight/Fire light",
    "Hard light (sharp shadows)",
    "Soft light/Diffused (gentle shadows)",
    "Dappled light",
    "Spotted light",
    "Front lighting",
    "Side lighting",
    "Back lighting",
    "Rim lighting (edge highlight)",
    "Under lighting/Uplight",
    "Top lighting",
    "Volumetric/God rays",
    "Lens flare",
    "Bloom/Glow effect",
    "Caustics (light patterns)",
    "Cinematic lighting",
    "Dramatic lighting",
    "High key (bright, low contrast)",
    "Low key (dark, high contrast)",
    "Chiaroscuro (strong contrast)",
    "Rembrandt lighting",
    "Butterfly/Paramount lighting",
    "Split lighting",
    "Loop lighting",
    "Broad lighting",
    "Short lighting",
    "Neon lighting/Cyberpunk",
    "Black light/UV",
    "Infrared look",
    "Silver reflector look",
    "Gold reflector look",
    "Prismatic/Rainbow light",
    "Holographic lighting",
];

pub(super) static GENDER: &[&str] = &[
    "Feminine",
    "Masculine",
    "Androgynous",
    "Unspecified/Any",
];

pub(super) static AGE_GROUP: &[&str] = &[
    "Infant (0-1)",
    "Toddler (1-3)",
    "Child (4-12)",
    "Teenager (13-19)",
    "Young adult (20-30)",
    "Adult (30-50)",
    "Middle-aged (50-65)",
    "Elderly (65+)",
];

pub(super) static BODY_TYPE: &[&str] = &[
    "Slim/Lean",
    "Athletic/Toned",
    "Average/Medium",
    "Curvy/Voluptuous",
    "Muscular/Bodybuilder",
    "Plus-size",
    "Petite/Small frame",
    "Tall/Lanky",
];

pub(super) static POSTURE: &[&str] = &[
    "Standing/Upright",
    "Sitting",
    "Reclining/Lounging",
    "Leaning",
    "Crouching/Squatting",
    "Kneeling",
    "Lying prone",
    "Lying on back",
    "Lying on side",
    "Walking/Striding",
    "Running",
    "Jumping/Leaping",
    "Dancing",
    "Stretching",
    "Bending forward",
    "Arching back",
    "Twisting torso",
    "Arms crossed",
    "Hands on hips",
    "Hands behind head",
    "Hands in pockets",
    "Reaching out",
    "Pointing",
    "Waving",
    "Clapping",
    "Fist raised",
    "Prayer pose",
    "Meditation pose",
    "Power pose/Confident stance",
    "Shy/Reserved posture",
    "Relaxed/Casual",
    "Formal/Stiff posture",
    "Defensive/Closed posture",
    "Open/Inviting posture",
    "Fatigued/Slumped",
    "Confident/Assertive",
    "Submissive/Humble",
];

pub(super) static EXPRESSION: &[&str] = &[
    "Neutral/Calm",
    "Smiling/Happy",
    "Laughing/Joyful",
    "Grinning/Mischievous",
    "Content/Serene",
    "Thoughtful/Contemplative",
    "Concentrating/Focused",
    "Surprised/Shocked",
    "Amazed/Wonderstruck",
    "Confused/Puzzled",
    "Worried/Anxious",
    "Sad/Melancholic",
    "Crying/Tearful",
    "Angry/Furious",
    "Annoyed/Irritated",
    "Disgusted/Revolted",
    "Fearful/Scared",
    "Horrified/Terrified",
    "Bored/Disinterested",
    "Tired/Exhausted",
    "Sleepy/Drowsy",
    "Determined/Resolute",
    "Confident/Self-assured",
    "Seductive/Alluring",
    "Mysterious/Enigmatic",
    "Playful/Mischievous",
    "Sarcastic/Wry",
    "Empathetic/Understanding",
    "Compassionate/Caring",
    "Proud/Achievement",
    "Hopeful/Optimistic",
    "Disappointed/Defeated",
    "Embarrassed/Shy",
    "Flirtatious/Playful",
    "Defiant/Challenging",
    "Longing/Yearning",
    "Nostalgic/Wistful",
    "Ecstatic/Euphoric",
];

pub(super) static HAIR_STYLE: &[&str] = &[
    "Bald/Shaved",
    "Buzz cut/Very short",
    "Short hair",
    "Medium length",
    "Long hair",
    "Very long/Flowing",
    "Bob cut",
    "Long bob (Lob)",
    "Pixie cut",
    "Shag cut",
    "Layered cut",
    "Feathered cut",
    "Asymmetric cut",
    "Undercut",
    "Fade cut",
    "Tapered cut",
    "Bun/Chignon",
    "Top knot",
    "Ponytail",
    "High ponytail",
    "Low ponytail",
    "Braid/Single",
    "Braids/Multiple",
    "French braid",
    "Dutch braid",
    "Fishtail braid",
    "Cornrows",
    "Dreadlocks/Locs",
    "Updo/Elegant",
    "Half up/Half down",
    "Curly/Natural curls",
    "Wavy hair",
    "Straight/Sleek",
    "Afro/Natural",
    "Permed hair",
    "Spiked hair",
    "Mohawk/Faux hawk",
    "Pompadour",
    "Quiff",
    "Pigtails",
    "Space buns",
    "With flowers in hair",
    "With ribbon/bow",
    "With decorative clips",
    "With headband",
    "With bobby pins visible",
    "With tiara/crown",
    "With veil",
    "Head wrap/Scarf",
];

pub(super) static HAIR_COLOR: &[&str] = &[
    "Black hair",
    "Jet black",
    "Off-black",
    "Dark brown",
    "Medium brown",
    "Light brown",
    "Chestnut/Auburn brown",
    "Auburn/Red-brown",
    "Copper/Red-orange",
    "Red hair",
    "Burgundy/Wine red",
    "Cherry red",
    "Strawberry blonde",
    "Honey blonde",
    "Golden blonde",
    "Platinum blonde",
    "Ash blonde",
    "Dirty blonde",
    "Sandy blonde",
    "White hair",
    "Silver/Grey",
    "Salt and pepper",
    "Pastel pink",
    "Hot pink",
    "Lavender/Purple",
    "Blue hair",
    "Teal/Turquoise",
    "Green hair",
    "Mint green",
    "Orange hair",
    "Yellow hair",
    "Rainbow/Multi-colored",
    "Ombre gradient",
    "Balayage highlights",
    "With highlights",
    "With lowlights",
    "Two-tone/Split dye",
];

pub(super) static SKIN_TONE: &[&str] = &[
    "Very fair/Porcelain",
    "Fair/Light",
    "Light beige",
    "Medium fair",
    "Olive/Medium",
    "Tan/Moderate brown",
    "Medium-deep brown",
    "Deep brown",
    "Very deep brown",
    "Dark chocolate",
    "Ebony/Black",
    "Cool with pink undertone",
    "Cool with blue undertone",
    "Warm with golden undertone",
    "Warm with peach undertone",
    "Neutral undertone",
    "Yellow-olive undertone",
    "Red-bronze undertone",
];

pub(super) static EYE_COLOR: &[&str] = &[
    "Dark brown eyes",
    "Medium brown eyes",
    "Light brown/Amber eyes",
    "Hazel eyes",
    "Green eyes",
    "Emerald green eyes",
    "Blue eyes",
    "Ice blue eyes",
    "Navy/Dark blue eyes",
    "Grey eyes",
    "Steel grey eyes",
    "Violet/Purple eyes",
    "Amber/Gold eyes",
    "Heterochromia (different colors)",
    "Black eyes",
    "Albino red/pink",
    "Cat-like eyes",
    "Glowing/Supernatural eyes",
];

pub(super) static CLOTHING: &[&str] = &[
    "Casual/Everyday",
    "Streetwear/Urban",
    "Athleisure/Sporty casual",
    "Minimalist/Basics",
    "Preppy",
    "Bohemian/Boho-chic",
    "Formal/Evening wear",
    "Black tie/Gala",
    "White tie/Ultra formal",
    "Business/Professional",
    "Business casual",
    "Cocktail attire",
    "1920s Flapper/Art Deco",
    "1940s/Wartime style",
    "1950s/Rockabilly",
    "1960s/Mod style",
    "1970s/Disco/Boho",
    "1980s/Neon/Big hair era",
    "1990s/Grunge",
    "Victorian era dress",
    "Edwardian era dress",
    "Renaissance/Medieval",
    "Ancient Roman/Greek",
    "Baroque/Rococo fashion",
    "Punk/Rock",
    "Goth/Dark aesthetic",
    "Emo/Scene",
    "Metal/Headbanger",
    "Hip-hop/Urban",
    "Skater style",
    "Surfer/Beach",
    "Hipster/Indie",
    "Normcore",
    "Fantasy armor/Warrior",
    "Elven/Ethereal",
    "Steampunk fashion",
    "Cyberpunk/Techwear",
    "Futuristic/Sci-fi",
    "Post-apocalyptic/Mad Max",
    "Pirate/Swashbuckler",
    "Ninja/Assassin",
    "Samurai/Ronin",
    "Vampire/Gothic romantic",
    "Fairy/Pixie aesthetic",
    "Military/Combat uniform",
    "Police/Law enforcement",
    "Medical/Scrubs",
    "Construction/Work wear",
    "Chef/Professional kitchen",
    "Sports uniform/Jersey",
    "Traditional Asian (Hanfu, Kimono, etc.)",
    "Traditional Indian (Sari, Lehenga)",
    "Traditional African (Dashiki, Ankara)",
    "Traditional Middle Eastern",
    "Indigenous/Native traditional",
    "Traditional European folk",
    "Swimwear/Bikini",
    "Summer dress/Flowing",
    "Resort wear/Luxury casual",
    "Winter coat/Heavy layers",
    "Autumn layered/Earth tones",
    "Spring pastels/Light fabrics",
];

pub(super) static MAKEUP_BASE: &[&str] = &[
    "No makeup/Natural",
    "BB cream/Light coverage",
    "Sheer/Natural foundation",
    "Medium coverage",
    "Full coverage/Flawless",
    "Matte finish",
    "Dewy/Glowing finish",
    "Satin finish",
    "Luminous/Radiant",
    "Glass skin/K-beauty",
    "Airbrushed finish",
];

pub(super) static EYESHADOW: &[&str] = &[
    "No eyeshadow",
    "Natural/Neutral tones",
    "Warm tones (browns, oranges)",
    "Cool tones (greys, blues)",
    "Smoky eye",
    "Soft smokey eye",
    "Dramatic black smokey eye",
    "Cut crease",
    "Halo eye",
    "Winged/Extended shadow",
    "Glitter eyeshadow",
    "Shimmer/Metallic",
    "Matte eyeshadow",
    "Monochromatic eye",
    "Neon/Bright colors",
    "Pastel eyeshadow",
    "Jewel tones (emerald, sapphire)",
    "Gold eyeshadow",
    "Silver eyeshadow",
    "Bronze/Copper",
    "Red/Burgundy tones",
    "Pink/Rose gold",
    "Purple/Lavender",
    "Blue/Cobalt eyeshadow",
    "Green/Forest eyeshadow",
    "Graphic liner eyeshadow",
    "Negative space eye makeup",
];

pub(super) static EYELINER: &[&str] = &[
    "No eyeliner",
    "Tightline/Upper waterline",
    "Thin natural line",
    "Classic winged eyeliner",
    "Cat eye/Dramatic wing",
    "Double wing eyeliner",
    "Smudged/Smokey liner",
    "Graphic eyeliner shapes",
    "Colored eyeliner",
    "White waterline",
    "Floating crease liner",
    "Puppy dog eye (downward wing)",
    "Fox eye (elongated upward)",
    "E-girl eyeliner (heart, star)",
    "Negative space liner",
    "Decorative gems/glitter liner",
];

pub(super) static MASCARA: &[&str] = &[
    "No mascara",
    "Natural lashes",
    "Lengthening mascara",
    "Volumizing/Thick lashes",
    "Curled lashes",
    "Dramatic/False lash look",
    "Spider lashes",
    "Colored mascara",
    "Emphasized bottom lashes",
    "Clumped/Doll-like lashes",
    "Wispy lashes",
    "Feathered lash look",
];

pub(super) static EYEBROWS: &[&str] = &[
    "Natural/Untouched brows",
    "Brushed up/Soap brows",
    "Arched/Defined",
    "Straight/Korean style",
    "Rounded/Soft arch",
    "S-shaped brows",
    "High dramatic arch",
    "Boyish/Thick brows",
    "Pencil thin/90s style",
    "Microbladed look",
    "Ombre/Powder brows",
    "Bleached brows",
    "Colored/Unusual brow color",
    "Glitter/Decorated brows",
    "Unibrow/Connected",
    "Feathered/Hair stroke look",
];

pub(super) static BLUSH: &[&str] = &[
    "No blush",
    "Natural flush/Subtle",
    "Sun-kissed/Across nose",
    "Draping/Sculpted blush",
    "Apple cheeks/Cute",
    "Contoured/Structured",
    "Drunk blush/Low on cheeks",
    "E-girl style (nose + cheeks)",
    "Dramatic/Heavy blush",
    "Monochrome matching",
    "Pink/Rosy blush",
    "Peach/Coral blush",
    "Plum/Berry blush",
    "Orange/Terracotta blush",
    "Bronzer as blush",
];

pub(super) static CONTOUR: &[&str] = &[
    "No contour",
    "Natural/Subtle contour",
    "Dramatic chiselled look",
    "Defined nose contour",
    "Strong jawline definition",
    "Prominent cheekbones",
    "Forehead contour",
    "Full face contouring",
    "Cream/Bronzed contour",
    "Cool tone/Ash contour",
];

pub(super) static HIGHLIGHT: &[&str] = &[
    "No highlight",
    "Natural subtle glow",
    "Dewy/Wet look",
    "Blinding/Intense highlight",
    "Golden highlight",
    "Silver/Icy highlight",
    "Champagne/Rose gold",
    "Holographic/Duochrome",
    "Glitter highlight",
    "Inner corner highlight",
    "Brow bone highlight",
    "Cupid's bow highlight",
    "Nose bridge highlight",
    "Collarbone/Body highlight",
];

pub(super) static LIPS: &[&str] = &[
    "No lip product",
    "Natural lip color",
    "Tinted balm/Sheer",
    "Lip gloss/Shiny",
    "Satin finish",
    "Matte lipstick",
    "Velvet finish",
    "Cream finish",
    "Lip stain/Tint",
    "Ombre/Gradient lips",
    "Lip liner defined",
    "Overlined/Full lips",
    "Understated liner",
    "Glossy center/Dewy",
    "Nude/Natural pink",
    "Brown nude",
    "Peach/Coral",
    "Pink/Baby pink",
    "Hot pink/Fuchsia",
    "Classic red",
    "Deep red/Burgundy",
    "Berry/Wine",
    "Plum/Purple",
    "Orange/Coral red",
    "Coral",
    "Mauve/Dusty rose",
    "Glitter lip",
    "Metallic/Chrome lip",
    "Black/Dark goth",
    "Unusual color (blue, green, etc.)",
    "Glossy black",
    "Glitter topper",
];

pub(super) static NAILS: &[&str] = &[
    "No polish/Natural",
    "Clear gloss",
    "Natural pink/Manicured",
    "French manicure",
    "American manicure",
    "Red nails",
    "Pink nails",
    "Coral/Peach nails",
    "Orange nails",
    "Yellow nails",
    "Green nails",
    "Blue nails",
    "Purple nails",
    "Black nails",
    "White nails",
    "Nude/Neutral nails",
    "Brown/Taupe nails",
    "Grey nails",
    "Colored French tip",
    "Ombre/Gradient nails",
    "Glitter/Sparkle",
    "Chrome/Mirror nails",
    "Metallic/Gold/Silver",
    "Matte finish",
    "High gloss/Shine",
    "Minimalist nail art",
    "Floral designs",
    "Geometric patterns",
    "Abstract art",
    "Animal print",
    "Marble effect",
    "Holographic/Aurora",
    "Cat eye/Magnetic",
    "Jelly/Translucent",
    "Milk bath nails",
    "Short nails",
    "Medium length",
    "Long nails",
    "Stiletto shape",
    "Coffin/Ballerina",
    "Almond shape",
    "Square shape",
    "Rounded shape",
    "Oval shape",
    "Edge/Pointed square",
    "Lipstick shape",
    "Arrowhead shape",
    "Acrylic extensions",
    "Gel polish",
    "Dip powder",
    "Press-on nails",
    "Rhinestones/Gems",
    "Nail chains/Jewelry",
    "3D nail art",
    "Pierced nails",
];
