// curlicue-cli/src/contractions.rs

// Contraction word lists consulted by the classifier and the resolver.

// Four categories, keyed by where the apostrophe sits and whether the word
// can also stand alone beside a real quotation mark:
// - began unambiguous:  'twas  — always a contraction
// - began ambiguous:    'cause — contraction or quoted "cause"
// - ended unambiguous:  thinkin' — always a dropped letter
// - ended ambiguous:    o' — contraction or a sentence ending in "o"
// Lookups are case-insensitive; entries are lowercased once at build time.

use std::collections::HashSet;
use std::fmt;

/// Immutable contraction oracle. Build once per configuration and share.
#[derive(Debug, Clone)]
pub struct Contractions {
    began_unambiguous: HashSet<String>,
    began_ambiguous: HashSet<String>,
    ended_unambiguous: HashSet<String>,
    ended_ambiguous: HashSet<String>,
}

/// Collects caller-supplied word lists. A category left empty falls back
/// to the built-in defaults for that category.
#[derive(Debug, Default)]
pub struct Builder {
    began_unambiguous: Vec<String>,
    began_ambiguous: Vec<String>,
    ended_unambiguous: Vec<String>,
    ended_ambiguous: Vec<String>,
}

impl Builder {
    #[must_use]
    pub fn with_began_unambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.began_unambiguous.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_began_ambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.began_ambiguous.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_ended_unambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ended_unambiguous.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_ended_ambiguous<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ended_ambiguous.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn build(self) -> Contractions {
        Contractions {
            began_unambiguous: collect(self.began_unambiguous, BEGAN_UNAMBIGUOUS),
            began_ambiguous: collect(self.began_ambiguous, BEGAN_AMBIGUOUS),
            ended_unambiguous: collect(self.ended_unambiguous, ENDED_UNAMBIGUOUS),
            ended_ambiguous: collect(self.ended_ambiguous, ENDED_AMBIGUOUS),
        }
    }
}

fn collect(words: Vec<String>, fallback: &[&str]) -> HashSet<String> {
    if words.is_empty() {
        fallback.iter().map(|w| w.to_lowercase()).collect()
    } else {
        words.into_iter().map(|w| w.to_lowercase()).collect()
    }
}

impl Contractions {
    #[must_use]
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Answers whether the word always starts with an apostrophe ('twas).
    #[must_use]
    pub fn began_unambiguously(&self, word: &str) -> bool {
        self.began_unambiguous.contains(&word.to_lowercase())
    }

    /// Answers whether the word could start with an apostrophe but is also
    /// a valid word in non-contracted form ('cause vs. "cause").
    #[must_use]
    pub fn began_ambiguously(&self, word: &str) -> bool {
        self.began_ambiguous.contains(&word.to_lowercase())
    }

    /// Answers whether the word always ends with an apostrophe (thinkin').
    #[must_use]
    pub fn ended_unambiguously(&self, word: &str) -> bool {
        self.ended_unambiguous.contains(&word.to_lowercase())
    }

    /// Answers whether the word could end with an apostrophe.
    ///
    /// Besides the listed entries this holds for any word ending in `s`,
    /// `z`, or `x` (possessives) and any multi-letter word ending in `n`
    /// (dropped-g gerunds). A single `n` is excluded so `'n'` stays
    /// unambiguous, while `o'` still matches because a sentence can end
    /// with the letter o.
    #[must_use]
    pub fn ended_ambiguously(&self, word: &str) -> bool {
        let check = word.to_lowercase();

        self.ended_ambiguous.contains(&check)
            || check.ends_with('s')
            || check.ends_with('z')
            || check.ends_with('x')
            || (check.chars().count() > 1 && check.ends_with('n'))
    }
}

impl Default for Contractions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for Contractions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = |f: &mut fmt::Formatter<'_>, title: &str, set: &HashSet<String>| {
            let mut words: Vec<&str> = set.iter().map(String::as_str).collect();
            words.sort_unstable();
            writeln!(f, "{title}:")?;
            writeln!(f, "  {}", words.join(" "))
        };

        section(f, "began unambiguous", &self.began_unambiguous)?;
        section(f, "began ambiguous", &self.began_ambiguous)?;
        section(f, "ended unambiguous", &self.ended_unambiguous)?;
        section(f, "ended ambiguous", &self.ended_ambiguous)
    }
}

/// Words whose leading straight apostrophe cannot be mistaken for an
/// opening single quote.
const BEGAN_UNAMBIGUOUS: &[&str] = &[
    "aporth", "boutcha", "boutchu", "cept", "dillo", "em", "fraid", "gainst",
    "n", "neath", "nother", "onna", "onna'", "owlin", "pon", "s", "sblood",
    "scuse", "sfar", "sfoot", "t", "taint", "tain", "til", "tis", "tisn",
    "tshall", "twas", "twasn", "tween", "twere", "tweren", "twixt", "twon",
    "twou", "twould", "twouldn", "ve",
];

/// Words whose leading apostrophe may be either a contraction or a word
/// standing beside an opening single quote.
const BEGAN_AMBIGUOUS: &[&str] = &[
    // about | boxing match
    "bout",
    // because | causal
    "cause",
    // what you | choo choo train
    "choo",
    // he | e pluribus unum
    "e",
    // here | earlier
    "ere",
    // afro | to and fro
    "fro",
    // whore | ho ho!
    "ho",
    // okay | letter K
    "kay",
    // lo | lo and behold
    "lo",
    // are | regarding
    "re",
    // what's up | to sup
    "sup",
    // it will | twill fabric
    "twill",
    // them | utterance
    "um",
    // is that | Iranian village
    "zat",
];

const ENDED_AMBIGUOUS: &[&str] = &[
    // give | martial arts garment
    "gi",
    // in | I
    "i",
    // of | letter o
    "o",
];

/// Words that always end in a dropped letter, including the common
/// -ing → -in' gerund forms.
const ENDED_UNAMBIGUOUS: &[&str] = &[
    // and
    "an",
    // for/before
    "fo",
    // friend
    "frien",
    // just
    "jus",
    // lord
    "lor",
    // myself
    "masel",
    // and ('n')
    "n",
    // old
    "ol",
    // howling
    "owlin",
    // San (Francisco)
    "sa",
    // shift
    "shif",
    // the
    "th",
    // what
    "wha",
    // world
    "worl",
    "acceptin", "accompanyin", "accordin", "accountin", "achievin",
    "acquirin", "actin", "addin", "addressin", "adjoinin", "adoptin",
    "advancin", "advertisin", "affectin", "agin", "allowin", "amazin",
    "analyzin", "answerin", "anythin", "appearin", "applyin", "approachin",
    "arguin", "arisin", "arrivin", "askin", "assessin", "assumin",
    "attackin", "attemptin", "attendin", "avoidin", "bankin", "bargainin",
    "bearin", "beatin", "becomin", "beginnin", "bein", "believin",
    "belongin", "bendin", "bindin", "bleedin", "blessin", "blowin",
    "boilin", "borrowin", "breakin", "breathin", "breedin", "bringin",
    "broadcastin", "buildin", "burnin", "buyin", "calculatin", "callin",
    "carryin", "castin", "causin", "ceilin", "challengin", "changin",
    "checkin", "choosin", "claimin", "cleanin", "clearin", "climbin",
    "closin", "clothin", "collectin", "combinin", "comin", "commandin",
    "comparin", "compellin", "competin", "computin", "concernin",
    "concludin", "conditionin", "conductin", "conflictin", "connectin",
    "considerin", "consistin", "constructin", "consultin", "consumin",
    "containin", "continuin", "contractin", "contributin", "controllin",
    "convincin", "cookin", "coolin", "copin", "correspondin", "counselin",
    "countin", "couplin", "coverin", "creatin", "crossin", "cryin",
    "cuttin", "dancin", "darlin", "datin", "dealin", "decidin", "declarin",
    "declinin", "decreasin", "definin", "demandin", "denyin", "dependin",
    "descendin", "describin", "designin", "destroyin", "determinin",
    "developin", "differin", "dinin", "directin", "discussin",
    "distinguishin", "disturbin", "dividin", "doin", "drawin", "dressin",
    "drinkin", "drivin", "droppin", "dryin", "durin", "dwellin", "dyin",
    "eatin", "editin", "emergin", "employin", "enablin", "encouragin",
    "endin", "engagin", "engineerin", "enjoyin", "enterin", "establishin",
    "evaluatin", "evenin", "everythin", "examinin", "exceedin", "excitin",
    "excludin", "existin", "expandin", "expectin", "experiencin",
    "explainin", "explorin", "expressin", "extendin", "facin", "failin",
    "fallin", "farmin", "fascinatin", "feedin", "feelin", "fightin",
    "filin", "fillin", "financin", "findin", "firin", "fishin", "fittin",
    "fixin", "floatin", "flowin", "flyin", "focusin", "followin", "forcin",
    "foregoin", "formin", "forthcomin", "foundin", "freezin", "fuckin",
    "functionin", "fundin", "gainin", "gatherin", "generatin", "gettin",
    "givin", "goin", "governin", "grantin", "growin", "hackin", "handlin",
    "hangin", "happenin", "havin", "headin", "healin", "hearin", "heatin",
    "helpin", "hidin", "holdin", "hopin", "housin", "huntin", "identifyin",
    "imagin", "implementin", "imposin", "improvin", "includin",
    "increasin", "indicatin", "interestin", "interpretin", "introducin",
    "involvin", "joinin", "judgin", "keepin", "killin", "knowin", "lackin",
    "landin", "lastin", "laughin", "layin", "leadin", "leanin", "learnin",
    "leavin", "lettin", "liftin", "lightin", "lightnin", "limitin",
    "listenin", "listin", "livin", "loadin", "lookin", "losin", "lovin",
    "lowerin", "lyin", "maintainin", "makin", "managin", "manufacturin",
    "mappin", "marketin", "markin", "matchin", "meanin", "measurin",
    "meetin", "meltin", "minin", "misleadin", "missin", "mixin", "modelin",
    "monitorin", "mornin", "movin", "neighborin", "nothin", "notin",
    "notwithstandin", "nursin", "observin", "obtainin", "occurrin",
    "offerin", "offsprin", "ongoin", "openin", "operatin", "opposin",
    "orderin", "organizin", "outstandin", "overwhelmin", "packin",
    "paintin", "parkin", "participatin", "passin", "payin", "pendin",
    "performin", "pickin", "pissin", "placin", "plannin", "plantin",
    "playin", "pleasin", "pointin", "possessin", "preachin", "precedin",
    "preparin", "presentin", "preservin", "pressin", "prevailin",
    "preventin", "pricin", "printin", "proceedin", "processin", "producin",
    "programmin", "promisin", "promotin", "protectin", "providin",
    "provin", "publishin", "pullin", "purchasin", "pursuin", "pushin",
    "puttin", "questionin", "rangin", "ratin", "reachin", "readin",
    "reasonin", "receivin", "recognizin", "recordin", "reducin",
    "referrin", "reflectin", "refusin", "regardin", "regulatin", "relatin",
    "remainin", "rememberin", "removin", "renderin", "repeatin",
    "replacin", "reportin", "representin", "requirin", "respectin",
    "respondin", "restin", "resultin", "returnin", "revealin", "ridin",
    "risin", "rulin", "runnin", "sailin", "samplin", "satisfyin", "savin",
    "sayin", "scatterin", "schoolin", "screenin", "searchin", "securin",
    "seein", "seekin", "selectin", "sellin", "sendin", "separatin",
    "servin", "settin", "settlin", "sewin", "shakin", "shapin", "sharin",
    "shiftin", "shinin", "shippin", "shittin", "shootin", "shoppin",
    "showin", "singin", "sinkin", "sittin", "sleepin", "smilin", "smokin",
    "solvin", "somethin", "spankin", "speakin", "spellin", "spendin",
    "spinnin", "spittin", "spreadin", "standin", "starin", "startin",
    "statin", "stayin", "stealin", "sterlin", "stimulatin", "stirrin",
    "stoppin", "strengthenin", "stretchin", "strikin", "strugglin",
    "studyin", "succeedin", "sufferin", "suggestin", "supplyin",
    "supportin", "surprisin", "surroundin", "survivin", "sweepin",
    "swellin", "swimmin", "switchin", "takin", "talkin", "teachin",
    "tellin", "testin", "thinkin", "threatenin", "throwin", "timin",
    "touchin", "tradin", "trainin", "travelin", "treatin", "tremblin",
    "tryin", "turnin", "underlyin", "understandin", "undertakin",
    "unwillin", "usin", "varyin", "viewin", "visitin", "votin", "waitin",
    "walkin", "wanderin", "wantin", "warnin", "washin", "watchin",
    "wearin", "weddin", "whackin", "willin", "windin", "winnin", "wishin",
    "wonderin", "workin", "writin", "yieldin",
];
