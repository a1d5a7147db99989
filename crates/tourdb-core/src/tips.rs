// crates/tourdb-core/src/tips.rs

//! # Responsible Tourism Tips
//!
//! A static catalog of do's and don'ts keyed by place category. The text is
//! configuration, not logic: it is baked in as constants and selected at
//! query time from a place's category flags. `General` applies to every
//! place; the remaining categories apply when the matching flag is set.

use crate::model::Place;
use crate::traits::TourBackend;
use serde::{Deserialize, Serialize};

/// A tip category derived from a place's terrain/climate flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    General,
    Urban,
    Mountain,
    Winter,
    Humid,
    DryHot,
    Rural,
    Monsoon,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Urban,
        Category::Mountain,
        Category::Winter,
        Category::Humid,
        Category::DryHot,
        Category::Rural,
        Category::Monsoon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Urban => "Urban",
            Category::Mountain => "Mountain",
            Category::Winter => "Winter",
            Category::Humid => "Humid",
            Category::DryHot => "Dry Hot",
            Category::Rural => "Rural",
            Category::Monsoon => "Monsoon",
        }
    }

    /// The static guideline text for this category.
    pub fn guideline(self) -> &'static Guideline {
        match self {
            Category::General => &GENERAL,
            Category::Urban => &URBAN,
            Category::Mountain => &MOUNTAIN,
            Category::Winter => &WINTER,
            Category::Humid => &HUMID,
            Category::DryHot => &DRY_HOT,
            Category::Rural => &RURAL,
            Category::Monsoon => &MONSOON,
        }
    }
}

/// Do's and don'ts for one category.
#[derive(Debug, Clone, Copy)]
pub struct Guideline {
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

impl<B: TourBackend> Place<B> {
    /// Categories applying to this place: `General` always, the rest from
    /// the flag columns, in [`Category::ALL`] order.
    pub fn categories(&self) -> Vec<Category> {
        let f = &self.flags;
        Category::ALL
            .into_iter()
            .filter(|c| match c {
                Category::General => true,
                Category::Urban => f.urban,
                Category::Mountain => f.mountain,
                Category::Winter => f.winter,
                Category::Humid => f.humid,
                Category::DryHot => f.dry_hot,
                Category::Rural => f.rural,
                Category::Monsoon => f.monsoon,
            })
            .collect()
    }

    /// Applicable categories paired with their guideline text.
    pub fn guidelines(&self) -> Vec<(Category, &'static Guideline)> {
        self.categories()
            .into_iter()
            .map(|c| (c, c.guideline()))
            .collect()
    }
}

static GENERAL: Guideline = Guideline {
    dos: &[
        "Respect local culture and traditions 🙏",
        "Support local businesses 🛍️🤝",
        "Minimize your environmental impact ♻️💡🐾",
        "Be mindful of your water usage 💧",
        "Learn a few phrases in the local language 🗣️",
        "Ask for permission before taking photos 📸",
        "Be aware of local laws and regulations ⚖️",
        "Stay hydrated 🚰",
        "Carry a basic first-aid kit 🩹💊",
        "Have travel insurance 🛡️💼",
    ],
    donts: &[
        "Engage in exploitative tourism 🚫💸",
        "Haggle disrespectfully 🤔😠",
        "Leave trash behind 🗑️❌",
        "Touch or disturb wildlife ✋🚫🐾",
        "Disrespect religious sites or practices 🚫🛐",
        "Buy souvenirs made from endangered species 🦒🐘🚫",
        "Drink tap water unless it is safe 🚱",
        "Over-consume alcohol 🍻❌",
        "Ignore local health advisories 😷⚠️",
    ],
};

static URBAN: Guideline = Guideline {
    dos: &[
        "Respect local customs and etiquette 🙏🤫",
        "Support local businesses and artists 🛍️🎨",
        "Use public transport 🚇🚌",
        "Be aware of your surroundings 🎒👀",
        "Stay hydrated 💧",
        "Dispose of waste properly 🚮♻️",
        "Walk or cycle when feasible 🚶‍♀️🚴‍♀️",
        "Check food hygiene 🍔",
        "Keep hands clean 🧼🖐️",
    ],
    donts: &[
        "Litter 🚮",
        "Be loud in residential areas 📢🚫",
        "Ignore local laws ⚖️🚫",
        "Fall for tourist scams 🎭🚫",
        "Vandalize public property 🏛️🚫",
        "Overuse ride-sharing apps 🚕🚫",
        "Drink too much alcohol 🍻❌",
        "Buy fake or unethical souvenirs 🚫",
    ],
};

static MOUNTAIN: Guideline = Guideline {
    dos: &[
        "Stay on marked trails 🚶‍♀️⬆️",
        "Pack out all trash 🎒🚮",
        "Dress in layers 🧥🧣🧤",
        "Acclimatize gradually 🌬️",
        "Carry water and snacks 💧🍫",
        "Inform someone of hiking plans 🗺️📞",
        "Check weather forecasts ☀️🌧️",
        "Wear proper footwear 🥾",
        "Use sun protection ☀️🧴🧢🕶️",
        "Know the signs of altitude sickness 🤕🤢⬇️",
    ],
    donts: &[
        "Go off-trail 🚫🚶‍♀️",
        "Litter 🍂🚫",
        "Underestimate the weather 🥶🥵",
        "Ascend too quickly 🚀⬆️",
        "Feed wild animals 🍎🚫🦊",
        "Make excessive noise 📢🤫",
        "Take unnecessary risks 🚧",
        "Contaminate water sources 🚫🧼💧",
    ],
};

static WINTER: Guideline = Guideline {
    dos: &[
        "Dress in warm layers 🧥🧣",
        "Protect extremities 🧤🥾🧢",
        "Stay hydrated 💧",
        "Know frostbite and hypothermia signs 🧊🤒",
        "Use proper gear for snow activities 🎿🥾",
        "Inform someone of your plans 🗺️📞",
        "Be careful on ice ⚠️⛸️",
        "Drive cautiously 🚗❄️",
        "Use moisturizer and lip balm 🧴👄",
    ],
    donts: &[
        "Underdress for the cold 🥶👕🚫",
        "Ignore shivering or numbness 🥶",
        "Drink excessively 🍻❌",
        "Go off-piste without training ⛷️🚫⚠️",
        "Drive without snow gear 🚗🌨️",
        "Litter in snow 🚮",
        "Touch metal with bare skin 🚫🖐️🧊",
    ],
};

static HUMID: Guideline = Guideline {
    dos: &[
        "Wear breathable clothing 👕",
        "Stay hydrated 💧",
        "Use insect repellent 🦟🧴",
        "Protect yourself from the sun ☀️🧴",
        "Watch for slippery paths ⚠️",
        "Respect ecosystems 🐾🌿",
        "Be aware of local wildlife 🐍🕷️",
        "Store food in airtight containers 🍲",
        "Prevent fungal infections 🍄🧼",
    ],
    donts: &[
        "Wear heavy clothing 👕🥵",
        "Forget insect protection 🦟🚫",
        "Litter 🚮",
        "Swim in stagnant water 🏊‍♀️🚫🦠",
        "Feed or disturb animals 🐒🚫",
        "Underestimate the heat 🥵",
        "Leave food exposed 🍲🐜",
        "Ignore heat exhaustion 😵‍💫🤒",
    ],
};

static DRY_HOT: Guideline = Guideline {
    dos: &[
        "Drink plenty of water 💧💧",
        "Wear loose light clothing 👕☀️",
        "Use sun protection 🧴🧢🕶️",
        "Plan activities for cooler hours ⏰🌙",
        "Inform someone of travel plans 🗺️📞",
        "Be aware of resource scarcity 🏜️",
        "Know the signs of heatstroke 🤢😵‍💫",
        "Protect eyes from glare 🕶️",
        "Moisturize lips 👄🧴",
    ],
    donts: &[
        "Underestimate the heat 🥵⚠️",
        "Neglect hydration 💧❌",
        "Wear dark tight clothes ⚫👕",
        "Go off-road unprepared 🚗🚨",
        "Litter 🚮",
        "Harm desert life 🌵🦎🚫",
        "Exert yourself during peak heat 🏃‍♀️☀️",
        "Ignore flash-flood warnings 🌊⚠️",
    ],
};

static RURAL: Guideline = Guideline {
    dos: &[
        "Engage respectfully with locals 🤗",
        "Ask before entering property 🏡🚪❓",
        "Support farmers and artisans 🥕🎨💰",
        "Respect farms and animals 🚜🐄",
        "Dress modestly 👗👖",
        "Expect limited infrastructure 📶🔌",
        "Learn about local plants and animals 🌿🕷️",
        "Stay hydrated 💧",
        "Use insect protection 🦟🧴",
    ],
    donts: &[
        "Treat locals as curiosities 🧐📸🚫",
        "Damage crops or fences 🌽🚧",
        "Leave trash 🚮",
        "Make loud noise 📢🤫",
        "Demand unavailable services 😤",
        "Disrespect traditions 🚫🙏",
        "Walk barefoot 🦶🚫",
        "Eat unsafe produce 🥛🍓🚫",
    ],
};

static MONSOON: Guideline = Guideline {
    dos: &[
        "Carry waterproof gear ☔🧥🥾",
        "Ensure food and water hygiene 🍲🚰",
        "Use mosquito protection 🦟🧴🛌",
        "Watch for slippery roads ⚠️",
        "Check rain forecasts 🌧️⚠️",
        "Carry a first-aid kit 🩹💊",
        "Protect electronics from water 📱☔",
        "Prepare for travel delays ⏰✈️",
        "Wash hands often 🧼🖐️",
    ],
    donts: &[
        "Wade through floodwaters 🚶‍♀️🌊🚫",
        "Eat unhygienic street food 🥗🚫",
        "Drink tap water 🚰🚫",
        "Ignore mosquito bites 🦟⚠️",
        "Drive recklessly on wet roads 🚗🚫",
        "Visit landslide-prone areas ⛰️🌊🚫",
        "Wear slow-drying fabrics 👕🚫",
        "Forget essential medication 💊🚫",
    ],
};
