//! Reply banners, "X wrote:" lead-ins and reply subject prefixes

/// Banner phrases written between dashes above a quoted original, e.g.
/// `-----Original Message-----`. Sourced from Thunderbird's
/// `mailnews.reply_header_originalmessage` localizations plus Outlook variants.
pub const REPLY_HEADER_PATTERNS: &[&str] = &[
    "Oorspronklike boodskap", // af
    "الرسالة الأصليَّة", // ar
    "Mensaxe orixinal", // ast
    "Зыходны ліст", // be
    "Оригинално писмо", // bg
    "মূল বার্তা", // bn-BD
    "Original Message", // bn-IN
    "Kemennadenn orinel", // br
    "Missatge original", // ca
    "Původní zpráva", // cs
    "Neges Wreiddiol", // cy
    "Oprindelig meddelelse", // da
    "Original-Nachricht", // de
    "Originalna powěsć", // dsb
    "Αρχικό μήνυμα", // el
    "Original Message", // en-GB
    "Original Message", // en-US
    "Original Message", // en-ZA
    "Mensaje original", // es-AR
    "Mensaje original", // es-ES
    "Algne kiri", // et
    "Jatorrizko mezua", // eu
    "Original Message", // fa
    "Alkuperäinen viesti / Orig.Msg.", // fi
    "Alkuperäinen viesti",
    "Message original", // fr
    "Oarspronklik berjocht", // fy-NL
    "Teachtaireacht Bhunaidh", // ga-IE
    "An teachdaireachd thùsail", // gd
    "Mensaxe orixinal", // gl
    "મૂળ સંદેશો", // gu-IN
    "הודעה מקורית", // he
    "मूल संदेश", // hi-IN
    "Izvorna poruka", // hr
    "Originalna powěsć", // hsb
    "Eredeti üzenet", // hu
    "Օրիգինալ նամակը", // hy-AM
    "Pesan Asli", // id
    "Upprunalegur póstur", // is
    "Messaggio originale", // it
    "Original Message", // ja
    "Original Message", // ja-JP-mac
    "საწყისი წერილი", // ka
    "Original Message", // km
    "원본 메시지", // ko
    "Originalus laiškas", // lt
    "Оригинална порака", // mk
    "Opprinnelig melding", // nb-NO
    "Oorspronkelijk bericht", // nl
    "Opphavleg melding", // nn-NO
    "Original Message", // pa-IN
    "Treść oryginalnej wiadomości", // pl
    "Mensagem original", // pt-BR
    "Mensagem original", // pt-PT
    "Messadi original", // rm
    "Mesajul original", // ro
    "Исходное сообщение", // ru
    "මුල් ලිපිය", // si
    "Pôvodná správa --- Original Message", // sk
    "Pôvodná správa",
    "Izvirno sporočilo", // sl
    "Mesazhi Origjinal", // sq
    "Ursprungligt meddelande", // sv-SE
    "Özgün İleti", // tr
    "Початкове повідомлення", // uk
    "Thư Gốc", // vi
    "Umyalezo Wakuqala", // xh
    "原始消息", // zh-CN
    "原始郵件", // zh-TW
    // Seen in the wild
    "Original Appointment", // English
    "Ursprüngliche Mitteilung", // German
    "Ursprüngliche Nachricht",
];

/// Lead-in lines introducing a quoted reply. Entries are regular expressions
/// matched against a whole trimmed line; `.*` stands for the author or date.
pub const REPLY_WROTE_PATTERNS: &[&str] = &[
    // "<author> wrote:"
    "كتب .*:", // ar
    ".* escribió:", // ast
    ".* напісаў:", // be
    ".* написа:", // bg
    "Skrivet eo bet gant .* :", // br
    ".* ha escrit:", // ca
    ".* napsal(a):", // cs
    "Ysgrifennodd .*:", // cy
    ".* skrev:", // da
    ".* schrieb:", // de
    ".* jo napisał:", // dsb
    "ο/η %s έγραψε", // el
    ".* wrote:", // en-GB
    ".* wrote:", // en-US
    ".* escribió:", // es-AR
    ".* escribió:", // es-ES
    ".* kirjutas:", // et
    ".*k idatzi zuen:", // eu
    ".* kirjoitti:", // fi
    ".* a écrit :", // fr
    ".* skreau:", // fy-NL
    "Scríobh .*:", // ga-IE
    "Sgrìobh .* na leanas:", // gd
    ".* escribiu:", // gl
    ".* je napisao/la:", // hr
    ".* napisa:", // hsb
    ".* írta:", // hu
    ".*-ը գրել է.", // hy-AM
    ".* skrifaði:", // is
    ".* ha scritto:", // it
    ".* wrote:", // ja
    ".* wrote:", // ja-JP-mac
    ".* បាន​សរសេរ៖", // km
    "%s 이(가) 쓴 글", // ko
    ".* rašė:", // lt
    "skrev .*:", // nb-NO
    ".* schreef:", // nl
    ".* skreiv:", // nn-NO
    ".* pisze:", // pl
    ".* escreveu:", // pt-BR
    ".* escreveu:", // pt-PT
    ".* ha scrit:", // rm
    ".* a scris:", // ro
    ".* пишет:", // ru
    ".* napísal(a):", // sk
    ".* je napisal(a):", // sl
    ".* shkroi:", // sq
    ".* skrev:", // sv-SE
    ".* yazdı:", // tr
    ".* wrote:", // uk
    ".* wrote:", // xh
    ".* 写道:", // zh-CN
    ".* 寫道:", // zh-TW
    // "<author> wrote on <date>:"
    "كتب .* على .* \u{202b}.*:", // ar
    ".* escribió'l .* a les .*:", // ast
    ".* напісаў .* у .*:", // be
    ".* написа на .* в .*:", // bg
    "D'an/ar .* .* eo bet skrivet gant .* :", // br
    ".* ha escrit el .* a les .*:", // ca
    ".* napsal(a) dne .* v .*:", // cs
    "Ysgrifennodd .* ar .* .*:", // cy
    ".* skrev den .* kl. .*:", // da
    ".* schrieb am .* um .*:", // de
    ".* jo .* .* napisał:", // dsb
    ".* wrote on .* .*:", // el
    ".* wrote on .* .*:", // en-GB
    ".* wrote on .* .*:", // en-US
    ".* escribió el .* a las .*:", // es-AR
    ".* escribió el .* a las .*:", // es-ES
    ".* kirjutas .* .*:", // et
    ".* igorleak .* .*(e)an idatzi zuen:", // eu
    ".* kirjoitti .* .*:", // fi
    ".* a écrit le .* .* :", // fr
    ".* skreau op .* om .*:", // fy-NL
    "Scríobh .* ar .* .*:", // ga-IE
    "Sgrìobh .* na leanas .* aig .*:", // gd
    ".* escribiu o .* ás .*:", // gl
    ".* napisao je .* u .*:", // hr
    ".* .* .* napisa:", // hsb
    ".* írta .* .* dátummal:", // hu
    ".*-ը գրել է .* .*-ին.", // hy-AM
    ".* skrifaði þann .* .*:", // is
    ".* ha scritto il .* alle .*:", // it
    ".* wrote on .* .*:", // ja
    ".* wrote on .* .*:", // ja-JP-mac
    ".* បាន​សរសេរ​នៅ​លើ .* .* ៖", // km
    ".* 이(가) .* .* 에 쓴 글:", // ko
    ".* rašė .* .*:", // lt
    ".* skrev den .* .*:", // nb-NO
    ".* schreef op .* om .*:", // nl
    ".* skreiv den .* .*:", // nn-NO
    "W dniu .* o .*, .* pisze:", // pl
    ".* escreveu em .* .*:", // pt-BR
    ".* escreveu às .* de .*:", // pt-PT
    ".* ha scrit ils .* a las .*:", // rm
    ".* a scris la .* .*:", // ro
    ".* пишет .* .*:", // ru
    ".* napísal(a) dňa .* o .*:", // sk
    ".* je .* ob .* napisal:", // sl
    ".* shkroi më .*, .*:", // sq
    ".* skrev den .* kl. .*:", // sv-SE
    ".*, .* .* tarihinde yazdı:", // tr
    ".* wrote on .* .*:", // uk
    ".* wrote on .* .*:", // xh
    ".* 写于 .* .*:", // zh-CN
    ".* 於 .* .* 寫道:", // zh-TW
    // "On <date>, <author> wrote:"
    "على .* \u{202b}.*، كتب .*:", // ar
    "El .* a les .*, .* escribió:", // ast
    ".* у .* .* напісаў:", // be
    "На .* в .*, .* написа:", // bg
    "D'an/ar .* .* eo bet skrivet gant .* :", // br
    "El .* a les .*, .* ha escrit:", // ca
    "Dne .* v .* .* napsal(a):", // cs
    "Ar .* .*, ysgrifennodd .*:", // cy
    "Den .* kl. .* skrev .*:", // da
    "Am .* um .* schrieb .*:", // de
    ".* .* jo .* napisał:", // dsb
    "On .* .*, .* wrote:", // el
    "On .* .*, .* wrote:", // en-GB
    "On .* .*, .* wrote:", // en-US
    "El .* a las .*, .* escribió:", // es-AR
    "El .* a las .*, .* escribió:", // es-ES
    ".* .* .* kirjutas:", // et
    ".* .*(e)an, .* igorleak idatzi zuen:", // eu
    ".*, .*, .* kirjoitti:", // fi
    "Le .* .*, .* a écrit :", // fr
    "Op .* om .*, skreau .*:", // fy-NL
    "Ar .* .*, scríobh .*:", // ga-IE
    "Sgrìobh .* na leanas .* aig .*:", // gd
    "O .* ás .*, .* escribiu:", // gl
    ".* u .*, .* je napisao/la:", // hr
    ".* .* .* napisa:", // hsb
    ".* .* keltezéssel, .* írta:", // hu
    ".* .*-ին .*ը գրել է.", // hy-AM
    "Þann .* .*, skrifaði .*:", // is
    "Il .* .*, .* ha scritto:", // it
    "On .* .*, .* wrote:", // ja
    "On .* .*, .* wrote:", // ja-JP-mac
    "នៅ​លើ .* .*, .* បាន​សរសេរ៖", // km
    ".* .*에 .* 이(가) 쓴 글:", // ko
    ".* .*, .* rašė:", // lt
    "Den .* .*, skrev .*:", // nb-NO
    "Op .* om .* schreef .*:", // nl
    "Den .* .*, .* skreiv:", // nn-NO
    "W dniu .* o .*, .* pisze:", // pl
    "Em .* .*, .* escreveu:", // pt-BR
    "Às .* de .*, .* escreveu:", // pt-PT
    "Ils .* a las .* ha .* scrit:", // rm
    "La .* .*, .* a scris:", // ro
    ".* .*, .* пишет:", // ru
    "Dňa .* o .* .* napísal(a):", // sk
    ".* je .* ob .* napisal:", // sl
    "Më .*, .*, .* shkroi:", // sq
    "Den .* kl. .*, skrev .*:", // sv-SE
    ".* .* tarihinde .* yazdı:", // tr
    "On .* .*, .* wrote:", // uk
    "On .* .*, .* wrote:", // xh
    "在 .* .*, .* 写道:", // zh-CN
    ".* 於 .* .* 寫道:", // zh-TW
    // Seen in the wild
    "On .* wrote:$", // English
    ".* wrote:$",
    ".* writes:$",
    ".* wrote on .*:",
    "On .* via IntroLogic .*",
    "El .* escribió:", // Spanish
    ".* escribió:",
    ".* ha escrito:",
    ".* shrieb:", // German
    "Am .* schrieb .*:",
    "Am .* hat .* geschrieben:",
    "Le .* écrit :", // French
    ".* 오후 .*에 .*님이 작성:", // Korean
    ".* GMT.* <.+@.+>:", // General
];

/// Subject abbreviations marking a reply, matched as `<prefix>: `.
///
/// See <https://en.wikipedia.org/wiki/List_of_email_subject_abbreviations>.
pub const REPLY_SUBJECTS: &[&str] = &[
    "RE", // English
    "關於", // Chinese (Traditional)
    "关于", // Chinese (Simplified)
    "SV", // Danish
    "Svar",
    "Antw", // Dutch
    "Antwoord",
    "VS", // Finnish
    "Vastaus",
    "RE", // French
    "Réponse",
    "AW", // German
    "Antwort",
    "ΑΠ", // Greek
    "Απάντηση",
    "ΣΧΕΤ",
    "Σχετικό",
    "תגובה", // Hebrew
    "הועבר",
    "Vá", // Hungarian
    "Válasz",
    "R", // Italian
    "RIF",
    "Riferimento",
    "SV", // Icelandic
    "Svara",
    "BLS", // Indonesian
    "Balas",
    "SV", // Norwegian
    "Svar",
    "SV", // Swedish
    "Svar",
    "RE", // Spanish
    "Responder",
    "RE", // Portuguese
    "Resposta",
    "Odp", // Polish
    "Odpowiedź",
    "YNT", // Turkish
    "Yanıt",
];
