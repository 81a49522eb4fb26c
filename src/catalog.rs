//! Built-in content shared read-only by every session: the dhikr phrases
//! that seed each counter store, the dua collection grouped by category, and
//! the names shown on the home page.

use serde::{Deserialize, Serialize};

pub const ADHKAR: &[&str] = &[
    "SubhanAllah (سبحان الله)",
    "Alhamdulillah (الحمد لله)",
    "Allahu Akbar (الله أكبر)",
    "La ilaha illallah (لا إله إلا الله)",
    "Astaghfirullah (أستغفر الله)",
    "La hawla wa la quwwata illa billah (لا حول ولاقوة إلا بالله)",
    "Bismillah (بسم الله)",
    "Hasbunallahu wa ni'mal wakeel (حسبنا الله ونعم الوكيل)",
    "Rabbi zidni ilma (ربي زدني علما)",
    "Allahumma inni as'aluka al-jannah (اللهم إني أسألك الجنة)",
    "Allahumma ajirni min an-naar (اللهم أجرني من النار)",
    "Ya Hayyu Ya Qayyum (يا حي يا قيوم)",
    "Allahumma barik lana (اللهم بارك لنا)",
    "Rabbighfir li (رب اغفر لي)",
    "Allahumma laka alhamd (اللهم لك الحمد)",
    "Allahumma anta as-salam (اللهم أنت السلام)",
    "SubhanAllahi wa bihamdihi (سبحان الله وبحمده)",
    "SubhanAllahil azeem (سبحان الله العظيم)",
    "Ya Rahman, Ya Raheem (يا رحمن يا رحيم)",
    "Rabbi la tadharni fardan (ربي لا تذرني فردا)",
    "Rabbi habli minas-salihin (رب هب لي من الصالحين)",
    "Allahumma rahmataka arju (اللهم رحمتك أرجو)",
    "Rabbana atina fid-dunya hasanah (ربنا آتنا في الدنيا حسنة)",
    "Rabbi yassir wa la tu'assir (ربي يسر ولا تعسر)",
    "Allahumma inni dhalamtu nafsi (اللهم إني ظلمت نفسي)",
    "Rabbi innee lima anzalta ilayya min khayrin faqir (ربي إني لما أنزلت إلي من خير فقير)",
    "Allahumma inni a'udhu bika min fitnatil qabri (اللهم إني أعوذ بك من فتنة القبر)",
    "Allahumma ahdina siratal mustaqeem (اللهم اهدنا الصراط المستقيم)",
    "Rabbi jalni muqimas-salah (ربي اجعلني مقيم الصلاة)",
    "Rabbi inni maghloobun fantasir (ربي إني مغلوب فانتصر)",
    "Rabbi awzi'ni an ashkura (ربي أوزعني أن أشكر)",
    "Rabbi la taj'alni ma'al qawmi dhalimeen (ربي لا تجعلني مع القوم الظالمين)",
    "Rabbi faghfir wa irham wa anta khayrur rahimeen (ربي اغفر وارحم وأنت خير الراحمين)",
    "Ya Dhal-Jalali wal-Ikram (يا ذا الجلال والإكرام)",
    "Allahumma salli ala Muhammadin wa ala aali Muhammad (اللهم صل على محمد وعلى آل محمد)",
    "Rabbi inni zalamtu nafsi faghfir li (ربي إني ظلمت نفسي فاغفر لي)",
    "Rabbi inni massaniyadh-dhurru wa anta arhamur-rahimeen (ربي إني مسني الضر وأنت أرحم الراحمين)",
    "Rabbi adkhilni mudkhala sidqin wa akhrijni mukhraja sidqin (ربي أدخلني مدخل صدق وأخرجني مخرج صدق)",
    "Allahumma anta rabbi la ilaha illa anta (اللهم أنت ربي لا إله إلا أنت)",
    "Rabbi a'udhu bika min hamazatish-shayateen (ربي أعوذ بك من همزات الشياطين)",
    "Rabbi la tuhammilni ma la taqata li bihi (ربي لا تحملني ما لا طاقة لي به)",
    "Rabbi la tukhzini yawmal qiyamah (ربي لا تخزني يوم القيامة)",
    "Rabbi yassir lana umoorana (ربي يسر لنا أمورنا)",
    "Rabbi a'udhu bika min athabil qabr (ربي أعوذ بك من عذاب القبر)",
    "Rabbi habli hukman wa alhiqni bis-salihin (ربي هب لي حكما وألحقني بالصالحين)",
    "Rabbi la tu'akhidhni bima nasitu (ربي لا تؤاخذني بما نسيت)",
    "Rabbi waqini adhab an-naar (ربي وقني عذاب النار)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Name {
    pub arabic: &'static str,
    pub english: &'static str,
}

const fn name(arabic: &'static str, english: &'static str) -> Name {
    Name { arabic, english }
}

/// The two name carousels on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameList {
    AsmaUlHusna,
    AsmaUnNabi,
}

impl NameList {
    pub const ALL: [NameList; 2] = [NameList::AsmaUlHusna, NameList::AsmaUnNabi];

    pub fn title(self) -> &'static str {
        match self {
            NameList::AsmaUlHusna => "Asma ul Husna",
            NameList::AsmaUnNabi => "Asma un Nabi",
        }
    }

    pub fn names(self) -> &'static [Name] {
        match self {
            NameList::AsmaUlHusna => ASMA_UL_HUSNA,
            NameList::AsmaUnNabi => ASMA_UN_NABI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dua {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuaCategory {
    DailyLife,
    Protection,
    Ramadan,
    Forgiveness,
    Quranic,
}

impl DuaCategory {
    pub const ALL: [DuaCategory; 5] = [
        DuaCategory::DailyLife,
        DuaCategory::Protection,
        DuaCategory::Ramadan,
        DuaCategory::Forgiveness,
        DuaCategory::Quranic,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DuaCategory::DailyLife => "Daily Life Duas",
            DuaCategory::Protection => "Protection Duas",
            DuaCategory::Ramadan => "Ramadan Duas",
            DuaCategory::Forgiveness => "Forgiveness & Mercy Duas",
            DuaCategory::Quranic => "Quranic & Special Duas",
        }
    }

    pub fn duas(self) -> &'static [Dua] {
        match self {
            DuaCategory::DailyLife => DAILY_LIFE,
            DuaCategory::Protection => PROTECTION,
            DuaCategory::Ramadan => RAMADAN,
            DuaCategory::Forgiveness => FORGIVENESS,
            DuaCategory::Quranic => QURANIC,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DuaSection {
    pub category: DuaCategory,
    pub title: &'static str,
    pub duas: &'static [Dua],
}

/// Immutable phrase list a session's counters start from.
#[derive(Debug, Clone)]
pub struct Catalog {
    phrases: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(ADHKAR.iter().copied())
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Every category in display order, or just the requested one.
    pub fn duas(&self, category: Option<DuaCategory>) -> Vec<DuaSection> {
        let categories: &[DuaCategory] = match category {
            Some(ref one) => std::slice::from_ref(one),
            None => &DuaCategory::ALL,
        };
        categories
            .iter()
            .map(|&category| DuaSection {
                category,
                title: category.title(),
                duas: category.duas(),
            })
            .collect()
    }
}

const DAILY_LIFE: &[Dua] = &[
    Dua {
        title: "Morning Dua",
        text: "اللهم بك أصبحنا وبك أمسينا وبك نحيا وبك نموت وإليك المصير",
    },
    Dua {
        title: "Evening Dua",
        text: "اللهم إني أمسيت أشهدك أنك أنت الله لا إله إلا أنت وحدك لا شريك لك",
    },
    Dua {
        title: "Before Sleeping",
        text: "بِسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
    },
    Dua {
        title: "Waking Up",
        text: "الحمد لله الذي أحيانا بعد ما أماتنا وإليه النشور",
    },
    Dua {
        title: "Before Eating",
        text: "بِسْمِ اللَّهِ",
    },
    Dua {
        title: "After Eating",
        text: "الْحَمْدُ لِلَّهِ الَّذِي أَطْعَمَنَا وَسَقَانَا وَجَعَلَنَا مِنَ الْمُسْلِمِينَ",
    },
    Dua {
        title: "Before Entering Toilet",
        text: "اللهم إني أعوذ بك من الخبث والخبائث",
    },
    Dua {
        title: "After Leaving Toilet",
        text: "غفرانك",
    },
    Dua {
        title: "Before Traveling",
        text: "سُبْحَانَ الَّذِي سَخَّرَ لَنَا هَذَا وَمَا كُنَّا لَهُ مُقْرِنِينَ",
    },
    Dua {
        title: "Dua for Parents",
        text: "رَّبِّ ارْحَمْهُمَا كَمَا رَبَّيَانِي صَغِيرًا",
    },
    Dua {
        title: "Dua Before Studying",
        text: "اللهم إني أسألك فهم النبيين وحفظ المرسلين",
    },
    Dua {
        title: "Dua After Studying",
        text: "اللهم اجعلني من الفاهمين",
    },
    Dua {
        title: "Dua for Entering Home",
        text: "اللهم إني أسألك خير المولج وخير المخرج",
    },
    Dua {
        title: "Dua for Leaving Home",
        text: "بسم الله توكلت على الله ولا حول ولا قوة إلا بالله",
    },
    Dua {
        title: "Dua for Entering the Mosque",
        text: "اللهم افتح لي أبواب رحمتك",
    },
    Dua {
        title: "Dua for Leaving the Mosque",
        text: "اللهم إني أسألك من فضلك",
    },
    Dua {
        title: "Dua Before Wearing Clothes",
        text: "الحمد لله الذي كساني هذا الثوب",
    },
    Dua {
        title: "Dua for New Clothes",
        text: "اللهم لك الحمد كما كسوتنيه",
    },
    Dua {
        title: "Dua Before Entering a Market",
        text: "لا إله إلا الله وحده لا شريك له",
    },
    Dua {
        title: "Dua for Health",
        text: "اللهم اشفني شفاء لا يغادر سقما",
    },
    Dua {
        title: "Dua for Strength",
        text: "حسبنا الله ونعم الوكيل",
    },
    Dua {
        title: "Dua for Rizq",
        text: "اللهم ارزقني رزقا حلالا طيبا مباركا",
    },
    Dua {
        title: "Dua for Success",
        text: "اللهم لا سهل إلا ما جعلته سهلا",
    },
    Dua {
        title: "Dua for Marriage",
        text: "اللهم ارزقني الزوج الصالح",
    },
    Dua {
        title: "Dua for Children",
        text: "رَبِّ هَبْ لِي مِنَ الصَّالِحِينَ",
    },
    Dua {
        title: "Dua for Patience",
        text: "رَبِّ أَوْزِعْنِي أَنْ أَشْكُرَ نِعْمَتَكَ",
    },
    Dua {
        title: "Dua for Contentment",
        text: "اللهم اجعلني قانعا بما رزقتني",
    },
    Dua {
        title: "Dua for Protection from Arrogance",
        text: "اللهم إني أعوذ بك من الكبر والعجب",
    },
];

const PROTECTION: &[Dua] = &[
    Dua {
        title: "Seeking Allah's Protection",
        text: "أعوذ بكلمات الله التامات من شر ما خلق",
    },
    Dua {
        title: "Protection from Evil Eye",
        text: "اللهم بارك ولا تضر",
    },
    Dua {
        title: "Protection from Enemies",
        text: "اللهم اكفنيهم بما شئت",
    },
    Dua {
        title: "Protection from Anxiety & Depression",
        text: "اللهم إني أعوذ بك من الهم والحزن",
    },
    Dua {
        title: "Dua Against Harm",
        text: "اللهم إني أعوذ بك من البرص والجنون والجذام وسيئ الأسقام",
    },
    Dua {
        title: "Dua for Protection of Family",
        text: "اللهم احفظ لي أهلي وأحبتي من كل سوء",
    },
];

const RAMADAN: &[Dua] = &[
    Dua {
        title: "Suhoor Dua",
        text: "وَبِصَوْمِ غَدٍ نَّوَيْتُ مِنْ شَهْرِ رَمَضَانَ",
    },
    Dua {
        title: "Iftar Dua",
        text: "اللهم إني لك صمت وبك آمنت وعليك توكلت وعلى رزقك أفطرت",
    },
    Dua {
        title: "Dua for Laylatul Qadr",
        text: "اللهم إنك عفو كريم تحب العفو فاعف عني",
    },
    Dua {
        title: "Dua for First Ashra (Mercy)",
        text: "اللهم ارحمنا برحمتك",
    },
    Dua {
        title: "Dua for Second Ashra (Forgiveness)",
        text: "اللهم اغفر لي ذنوبي",
    },
    Dua {
        title: "Dua for Third Ashra (Freedom from Hell)",
        text: "اللهم أجرني من النار",
    },
];

const FORGIVENESS: &[Dua] = &[
    Dua {
        title: "Dua for Forgiveness",
        text: "رب اغفر لي وتب علي إنك أنت التواب الرحيم",
    },
    Dua {
        title: "Dua for Mercy",
        text: "اللهم ارحمني برحمتك الواسعة",
    },
    Dua {
        title: "Dua for Repentance",
        text: "اللهم إني ظلمت نفسي فاغفر لي",
    },
    Dua {
        title: "Dua for a Pure Heart",
        text: "اللهم طهر قلبي من النفاق",
    },
    Dua {
        title: "Dua for the Day of Judgment",
        text: "اللهم اجعل قبري روضة من رياض الجنة",
    },
];

const QURANIC: &[Dua] = &[
    Dua {
        title: "Dua from Surah Al-Fatiha",
        text: "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
    },
    Dua {
        title: "Dua from Surah Al-Baqarah",
        text: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
    },
    Dua {
        title: "Dua from Surah Al-Kahf",
        text: "رَبِّ زِدْنِي عِلْمًا",
    },
    Dua {
        title: "Dua for Rizq",
        text: "اللهم ارزقني رزقا حلالا طيبا مباركا",
    },
    Dua {
        title: "Dua for the Hereafter",
        text: "اللهم اجعل قبري نورا",
    },
];

const ASMA_UL_HUSNA: &[Name] = &[
    name("ٱلْرَّحْمَـٰنُ", "The Most Merciful"),
    name("ٱلْرَّحِيمُ", "The Especially Merciful"),
    name("ٱلْمَلِكُ", "The King and Owner of Dominion"),
    name("ٱلْقُدُّوسُ", "The Absolutely Pure"),
    name("ٱلْسَّلَامُ", "The Source of Peace and Safety"),
    name("ٱلْمُؤْمِنُ", "The Giver of Faith and Security"),
    name("ٱلْمُهَيْمِنُ", "The Guardian"),
    name("ٱلْعَزِيزُ", "The Almighty"),
    name("ٱلْجَبَّارُ", "The Compeller"),
    name("ٱلْمُتَكَبِّر", "The Supreme"),
    name("ٱلْخَالِقُ", "The Creator"),
    name("ٱلْبَارِئُ", "The Evolver"),
    name("ٱلْمُصَوِّرُ", "The Fashioner"),
    name("ٱلْغَفَّارُ", "The Constant Forgiver"),
    name("ٱلْقَهَّارُ", "The All-Prevailing One"),
    name("ٱلْوَهَّابُ", "The Supreme Bestower"),
    name("ٱلْرَّزَّاقُ", "The Provider"),
    name("ٱلْفَتَّاحُ", "The Supreme Solver"),
    name("ٱلْعَلِيمُ", "The All-Knowing"),
    name("ٱلْقَابِضُ", "The Withholder"),
    name("ٱلْبَاسِطُ", "The Extender"),
    name("ٱلْخَافِضُ", "The Reducer"),
    name("ٱلْرَّافِعُ", "The Exalter"),
    name("ٱلْمُعِزُّ", "The Honourer-Bestower"),
    name("ٱلْمُذِلُّ", "The Dishonourer"),
    name("ٱلْسَّمِيعُ", "The All-Hearing"),
    name("ٱلْبَصِيرُ", "The All-Seeing"),
    name("ٱلْحَكَمُ", "The Impartial Judge"),
    name("ٱلْعَدْلُ", "The Just One"),
    name("ٱلْلَّطِيفُ", "The Subtle One"),
    name("ٱلْخَبِيرُ", "The All-Aware"),
    name("ٱلْحَلِيمُ", "The Most Forbearing"),
    name("ٱلْعَظِيمُ", "The Magnificent One"),
    name("ٱلْغَفُورُ", "The Great Forgiver"),
    name("ٱلْشَّكُورُ", "The Most Appreciative"),
    name("ٱلْعَلِيُّ", "The Most High, The Exalted"),
    name("ٱلْكَبِيرُ", "The Most Great"),
    name("ٱلْحَفِيظُ", "The Preserver"),
    name("ٱلْمُقِيتُ", "The Sustainer"),
    name("ٱلْحسِيبُ", "The Reckoner"),
    name("ٱلْجَلِيلُ", "The Majestic"),
    name("ٱلْكَرِيمُ", "The Most Generous, the Most Esteemed"),
    name("ٱلْرَّقِيبُ", "The Watchful"),
    name("ٱلْمُجِيبُ", "The Responsive One"),
    name("ٱلْوَاسِعُ", "The All-Encompassing, the Boundless"),
    name("ٱلْحَكِيمُ", "The All-Wise"),
    name("ٱلْوَدُودُ", "The Most Loving"),
    name("ٱلْمَجِيدُ", "The Glorious, Most Honorable"),
    name("ٱلْبَاعِثُ", "The Infuser of New Life"),
    name("ٱلْشَّهِيدُ", "The All-and-Ever Witnessing"),
    name("ٱلْحَقُ", "The Absolute Truth"),
    name("ٱلْوَكِيلُ", "The Trustee"),
    name("ٱلْقَوِيُ", "The All-Strong"),
    name("ٱلْمَتِينُ", "The Firm One"),
    name("ٱلْوَلِيُ", "The Solely Loyal"),
    name("ٱلْحَمِيدُ", "The Most Praiseworthy"),
    name("ٱلْمُحْصِيُ", "The All-Enumerating, the Counter"),
    name("ٱلْمُبْدِئُ", "The Originator, the Initiator"),
    name("ٱلْمُعِيدُ", "The Restorer, the Reinstater"),
    name("ٱلْمُحْيِى", "The Giver of Life"),
    name("ٱلْمُمِيتُ", "The Creator of Death"),
    name("ٱلْحَيُ", "The Ever-Living"),
    name("ٱلْقَيُّومُ", "The Sustainer, The Self-Subsisting"),
    name("ٱلْوَاجِدُ", "The Perceiver"),
    name("ٱلْمَاجِدُ", "The Glorious, Most Honorable"),
    name("ٱلْوَاحِدُ", "The Only One"),
    name("ٱلْأَحَدُ", "The Indivisible, The One"),
    name("ٱلْصَّمَدُ", "The Self-Sufficient, The Impregnable"),
    name("ٱلْقَادِرُ", "The Omnipotent"),
    name("ٱلْمُقْتَدِرُ", "The Creator of All Power"),
    name("ٱلْمُقَدِّمُ", "The Expediter"),
    name("ٱلْمُؤَخِّرُ", "The Delayer"),
    name("ٱلأوَّلُ", "The First"),
    name("ٱلْآخِرُ", "The Last"),
    name("ٱلْظَّاهِرُ", "The Manifest"),
    name("ٱلْبَاطِنُ", "The Hidden One, Knower of the Hidden"),
    name("ٱلْوَالِي", "The Sole Governor"),
    name("ٱلْمُتَعَالِي", "The Self Exalted"),
    name("ٱلْبَرُ", "The Source of All Goodness"),
    name("ٱلْتَّوَابُ", "The Ever-Pardoning"),
    name("ٱلْمُنْتَقِمُ", "The Just Requitor"),
    name("ٱلْعَفُوُ", "The Supreme Pardoner"),
    name("ٱلْرَّؤُفُ", "The Most Kind"),
    name("مَالِكُ ٱلْمُلْكِ", "Master of the Kingdom, Owner of the Dominion"),
    name("ذُوالْجَلَالِ وَالإكْرَامِ", "Possessor of Glory and Honor"),
    name("ٱلْمُقْسِطُ", "The Just One"),
    name("ٱلْجَامِعُ", "The Gatherer, the Uniter"),
    name("ٱلْغَنيُ", "The Self-Sufficient, the Wealthy"),
    name("ٱلْمُغْنِيُ", "The Enricher"),
    name("ٱلْمَانِعُ", "The Withholder"),
    name("ٱلْضَّارَ", "The Distresser"),
    name("ٱلْنَّافِعُ", "The Propitious, the Benefactor"),
    name("ٱلْنُّورُ", "The Light"),
    name("ٱلْهَادِي", "The Guide"),
    name("ٱلْبَدِيعُ", "Incomparable Originator"),
    name("ٱلْبَاقِي", "The Ever-Surviving"),
    name("ٱلْوَارِثُ", "The Inheritor"),
    name("ٱلْرَّشِيدُ", "The Guide, Infallible Teacher, and Knower"),
    name("ٱلْصَّبُورُ", "The Forbearing"),
];

const ASMA_UN_NABI: &[Name] = &[
    name("مُحَمَّدٌ", "The Praised One"),
    name("أَحْمَدُ", "The Most Praiseworthy"),
    name("طَهَ", "Pure, Clean"),
    name("يٰسٓ", "O Human Being"),
    name("الْمُصْطَفَى", "The Chosen One"),
    name("الْمُرْتَضَى", "The One Pleasing to Allah"),
    name("الْحَبِيبُ", "The Beloved"),
    name("السَّاجِدُ", "The One Who Prostrates"),
    name("الرَّاكِعُ", "The One Who Bows"),
    name("النَّبِيُّ", "The Prophet"),
    name("الرَّسُولُ", "The Messenger"),
    name("الصِّدِّيقُ", "The Truthful"),
    name("الأَمِينُ", "The Trustworthy"),
    name("الشَّافِعُ", "The Intercessor"),
    name("المُبَشِّرُ", "The Bringer of Good News"),
    name("النَّذِيرُ", "The Warner"),
    name("السِّرَاجُ الْمُنِيرُ", "The Illuminating Lamp"),
    name("الرَّحْمَةُ", "The Mercy"),
    name("الخَاتَمُ", "The Seal (of Prophets)"),
    name("المُزَمِّلُ", "The Enshrouded One"),
    name("المُدَّثِّرُ", "The Cloaked One"),
    name("الْمُؤَيَّدُ", "The Supported One"),
    name("الْمَاحِي", "The Eraser (of disbelief)"),
    name("الْحَاشِرُ", "The Gatherer"),
    name("الْعَاقِبُ", "The Successor"),
    name("الفَاتِحُ", "The Conqueror"),
    name("النَّاصِرُ", "The Helper"),
    name("الرَّحِيمُ", "The Compassionate"),
    name("التَّوَّابُ", "The Most Repentant"),
    name("الشَّهِيدُ", "The Witness"),
    name("الصَّادِقُ", "The Honest"),
    name("المَشْفُوعُ", "The One with Intercession"),
    name("الْمُقْتَدِي", "The Role Model"),
    name("الْمُجْتَبَى", "The Selected One"),
    name("الْمُحْسِنُ", "The Benevolent"),
    name("الْمُعَلِّمُ", "The Teacher"),
    name("السَّيِّدُ", "The Master"),
    name("الْمُبَارَكُ", "The Blessed One"),
    name("الْأُمِّيُّ", "The Unlettered Prophet"),
    name("الْمُنْجِي", "The Rescuer"),
    name("الرَّئُوفُ", "The Kind"),
    name("الْمُجَاهِدُ", "The Struggler (in Allah’s cause)"),
    name("الْمُتَوَاضِعُ", "The Humble One"),
    name("الْمُتَوَكِّلُ", "The One Who Relies on Allah"),
    name("الْكَافِي", "The Sufficient One"),
    name("النَّبِيُّ الأَكْرَمُ", "The Most Honored Prophet"),
    name("الصَّفِيُّ", "The Pure One"),
    name("الشَّاكِرُ", "The Grateful One"),
    name("الْحَلِيمُ", "The Forbearing One"),
    name("الْمُحْتَسِبُ", "The One Who Seeks Reward from Allah"),
    name("الْمُطْمَئِنُّ", "The Tranquil One"),
    name("الْمُنِيرُ", "The Radiant One"),
    name("الْمُبِينُ", "The Clear Expositor"),
    name("الْمُعْجِزُ", "The Miraculous"),
    name("الْمَأْمُونُ", "The Secured One"),
    name("الْمُجْزِي", "The One Who Recompenses"),
    name("الْمُتَضَرِّعُ", "The Supplicating One"),
    name("الْمُحْتَرَمُ", "The Honored One"),
    name("الْمَكْرُمُ", "The Noble One"),
    name("الصَّبُورُ", "The Patient One"),
    name("الْوَفِيُّ", "The Faithful One"),
    name("الْمُوَقَّرُ", "The Revered One"),
    name("المُحِبُّ", "The Loving One"),
    name("الْمُبَارَكُ", "The Blessed One"),
    name("السَّابِقُ", "The Forerunner"),
    name("الْخَيِّرُ", "The Good One"),
    name("الْهَادِي", "The Guide"),
    name("الْمُبِينُ", "The Manifest One"),
    name("الْمُخْتَارُ", "The Chosen One"),
    name("الْمُتَفَكِّرُ", "The Thoughtful One"),
    name("الْمُقَدَّمُ", "The One Who is Given Precedence"),
    name("الْمُؤْمِنُ", "The Faithful One"),
    name("الْمُعَظَّمُ", "The Highly Honored One"),
    name("الْمُهْتَدِي", "The Rightly Guided One"),
    name("السَّامِعُ", "The Listener"),
    name("الْمُرَبِّي", "The One Who Nurtures"),
    name("الْمُنِيبُ", "The One Who Turns to Allah"),
    name("الْمُشَفَّعُ", "The One Whose Intercession is Accepted"),
    name("المُجْتَهِدُ", "The Hardworking One"),
    name("الْمُحِبُّ", "The Loving One"),
    name("السَّالِمُ", "The Peaceful One"),
    name("النُّورُ", "The Light"),
    name("الْمُؤَيَّدُ", "The Supported One"),
    name("الْمُسَدَّدُ", "The One Guided to Success"),
    name("الْمُسْتَقِيمُ", "The Upright One"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_phrases_are_unique_and_colon_free() {
        let catalog = Catalog::builtin();
        let unique: HashSet<_> = catalog.phrases().iter().collect();
        assert_eq!(unique.len(), catalog.phrases().len());
        assert!(catalog.phrases().iter().all(|p| !p.contains(':')));
    }

    #[test]
    fn duas_without_filter_lists_every_category_in_order() {
        let sections = Catalog::builtin().duas(None);
        let categories: Vec<_> = sections.iter().map(|s| s.category).collect();
        assert_eq!(categories, DuaCategory::ALL.to_vec());
        assert!(sections.iter().all(|s| !s.duas.is_empty()));
    }

    #[test]
    fn name_lists_match_their_traditions() {
        assert_eq!(NameList::AsmaUlHusna.names().len(), 99);
        assert_eq!(NameList::AsmaUnNabi.names().len(), 85);
        assert_eq!(NameList::AsmaUlHusna.names()[0].english, "The Most Merciful");
        assert!(NameList::ALL.iter().all(|list| !list.names().is_empty()));
    }

    #[test]
    fn duas_with_filter_returns_single_section() {
        let sections = Catalog::builtin().duas(Some(DuaCategory::Ramadan));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Ramadan Duas");
        assert_eq!(sections[0].duas[0].title, "Suhoor Dua");
    }
}
