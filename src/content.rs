//! The embedded promotion-plan content, February 2026 edition.
//!
//! Everything below is literal campaign text; the renderer never interprets
//! it beyond wrapping.  Edits here are content edits, not code changes.

use crate::model::{Cover, Day, InfoBox, LegendEntry, Plan, Rule, SummaryRow, Task, Week};

const BOX_BLUE: [u8; 3] = [41, 98, 155];
const BOX_SIENNA: [u8; 3] = [160, 82, 45];
const BOX_GREEN: [u8; 3] = [76, 140, 50];
const BOX_PURPLE: [u8; 3] = [100, 50, 150];
const BOX_GRAPHITE: [u8; 3] = [50, 50, 50];

/// The complete plan, as published.
pub const PLAN: Plan = Plan {
    cover: Cover {
        title: "Jeleniogórzanie To My",
        subtitle: "Plan Promocji Strony",
        dates: "10–28 lutego 2026",
        tagline: "Interaktywna mapa Jeleniej Góry",
        site: "jeleniogorzanietomy.pl",
        generated: "Dokument wygenerowany: 10 lutego 2026",
    },
    running_header: "Jeleniogórzanie To My — Plan Promocji luty 2026",
    toc_title: "Spis Treści",
    legend_title: "1. Legenda priorytetów i oznaczeń",
    legend: LEGEND,
    features_title: "2. Funkcje systemu do promowania",
    features: FEATURES,
    weeks: &[WEEK_1, WEEK_2, WEEK_3],
    summary_title: "6. Podsumowanie celów na koniec lutego",
    summary: SUMMARY,
    goals_heading: "Cele gamifikacyjne do osiągnięcia na koniec lutego:",
    goals: GOALS,
    rules_title: "7. Kluczowe zasady na cały miesiąc",
    rules: RULES,
};

const LEGEND: &[LegendEntry] = &[
    LegendEntry {
        label: "P1",
        description: "Krytyczne — wykonaj tego dnia bezwzględnie",
    },
    LegendEntry {
        label: "P2",
        description: "Ważne — da się przesunąć maksymalnie o 1 dzień",
    },
    LegendEntry {
        label: "P3",
        description: "Nice-to-have — wykonaj jeśli starczy czasu",
    },
    LegendEntry {
        label: "Pinezka zielona (Miejsca)",
        description: "Lokalne firmy, usługi, atrakcje — budują wartość mapy",
    },
    LegendEntry {
        label: "Pinezka niebieska (Ciekawostki)",
        description: "Ciekawostki historyczne, przyrodnicze — wiralowy content",
    },
    LegendEntry {
        label: "Pinezka czerwona (Zgłoszenia)",
        description: "Problemy infrastrukturalne — budują wiarygodność platformy",
    },
    LegendEntry {
        label: "GAMIFIKACJA",
        description: "Działania promujące system poziomów, odznak i rankingu",
    },
];

const FEATURES: &[InfoBox] = &[
    InfoBox {
        title: "SYSTEM GAMIFIKACJI — Poziomy i XP",
        body: "Użytkownicy zdobywają punkty doświadczenia (XP) za aktywność:\n\
               • Dodanie pinezki: 50 XP  •  Zatwierdzenie przez moderację: 30 XP\n\
               • Otrzymanie głosu \"w górę\": 5 XP  •  Głosowanie: 2 XP\n\
               • Dodanie zdjęcia: 10 XP  •  Edycja pinezki: 15 XP  •  Codzienny login: 5 XP\n\
               Poziomy rosną wg formuły level² × 100 XP. System widoczny w górnym pasku nawigacji.",
        color: BOX_BLUE,
    },
    InfoBox {
        title: "ODZNAKI I OSIĄGNIĘCIA (12 domyślnych)",
        body: "Rzadkość: Common → Uncommon → Rare → Epic → Legendary\n\n\
               • Pierwszy krok (1 pinezka) — Common\n\
               • Aktywny mieszkaniec (5 pinezek) — Uncommon\n\
               • Lokalny ekspert (10 pinezek) — Rare\n\
               • Kartograf (25 pinezek) — Epic\n\
               • Legenda Jeleniej Góry (50 pinezek) — Legendary\n\
               • Głos obywatelski (1 głos) — Common\n\
               • Aktywny głosujący (10 głosów) — Uncommon\n\
               • Fotoreporter (1 zdjęcie) — Common\n\
               • Doświadczony (poziom 5) — Uncommon\n\
               • Weteran (poziom 10) — Rare\n\
               • Mistrz mapy (poziom 20) — Epic\n\
               • Wszechstronny (każdy typ pinezki) — Rare",
        color: BOX_SIENNA,
    },
    InfoBox {
        title: "RANKING TOP 10",
        body: "Publiczny ranking najaktywniejszych użytkowników. Kryteria:\n\
               1) Liczba dodanych miejsc  2) Aktualny poziom  3) Data rejestracji\n\
               Dostępny dla wszystkich przez przycisk \"Ranking\" w górnym pasku.",
        color: BOX_GREEN,
    },
    InfoBox {
        title: "GŁOSOWANIE I WERYFIKACJA SPOŁECZNA",
        body: "Każda pinezka może otrzymać głosy w górę/w dół od użytkowników.\n\
               • 50+ głosów netto: odznaka \"Zweryfikowane przez społeczność\" (zielona)\n\
               • -50 głosów netto: odznaka \"Kontrowersyjne\" (czerwona)\n\
               Głosowanie buduje zaangażowanie i wiarygodność danych na mapie.",
        color: BOX_PURPLE,
    },
    InfoBox {
        title: "PROFIL UŻYTKOWNIKA — Statystyki",
        body: "Każdy zalogowany użytkownik widzi swoje statystyki:\n\
               • Dodane miejsca, edycje, zdjęcia, odwiedzone miejsca\n\
               • Oddane głosy (w górę/w dół), otrzymane głosy\n\
               • Aktualny poziom i pasek postępu XP\n\
               • Zdobyte odznaki z opisami i rzadkością",
        color: BOX_GRAPHITE,
    },
    InfoBox {
        title: "ONBOARDING — Samouczek dla nowych",
        body: "Trzywarstwowy system wprowadzenia nowych użytkowników:\n\
               1) Kreator powitalny (3 kroki) — typy pinezek, jak dodawać, co jeszcze można robić\n\
               2) Przycisk pomocy \"?\" — zawsze dostępny, restart samouczka\n\
               3) Kontekstowe podpowiedzi — pojawiają się progresywnie przy pierwszej wizycie",
        color: BOX_BLUE,
    },
];

const WEEK_1: Week = Week {
    title: "3. Tydzień 1 (10–16 lutego)",
    days: &[
        Day {
            date: "Poniedziałek 10.02",
            motto: "KICKOFF & FUNDAMENT",
            tasks: &[
                Task {
                    title: "5 pinezek \"Miejsca\" — znane lokale gastronomiczne z centrum",
                    details: "Dodaj 5 popularnych restauracji/kawiarni. Każda pinezka: nazwa, \
                              adres, telefon, link do strony, 2-3 zdjęcia, opis 2-3 zdania. \
                              Pełne dane kontaktowe.",
                    goal: "Zapełnić mapę atrakcyjnym contentem — nowi odwiedzający widzą żywą, \
                           aktywną mapę",
                },
                Task {
                    title: "Post FB: Ogłoszenie startu projektu (typ: informacyjny)",
                    details: "\"Ruszamy z codziennym mapowaniem Jeleniej Góry! Codziennie nowe \
                              miejsca, ciekawostki i zgłoszenia. Dołącz do nas!\" + screenshot \
                              mapy z nowymi pinezkami.",
                    goal: "Budowanie nawyku śledzenia profilu, zapowiedź regularności publikacji",
                },
                Task {
                    title: "5 maili do firm z mapy — weryfikacja danych",
                    details: "Wyślij do 5 firm, które JUŻ są na mapie. Treść: \"Państwa firma \
                              znajduje się na interaktywnej mapie Jeleniej Góry. Prosimy o \
                              weryfikację danych (adres, telefon, godziny). Jeśli coś wymaga \
                              korekty, prosimy o odpowiedź.\"",
                    goal: "Nawiązanie relacji z lokalnymi firmami, weryfikacja danych, \
                           potencjalne udostępnienia",
                },
                Task {
                    title: "Post FB: Teaser systemu gamifikacji (typ: angażujący)",
                    details: "\"Czy wiesz, że na naszej mapie możesz zdobywać odznaki i awansować \
                              na kolejne poziomy? Dodaj swoją pierwszą pinezkę i odblokuj odznakę \
                              PIERWSZY KROK! Kto pierwszy zdobędzie odznakę LEGENDA JELENIEJ \
                              GÓRY?\" + grafika z listą odznak.",
                    goal: "Świadomość systemu gamifikacji od pierwszego dnia — motywacja do \
                           rejestracji",
                },
            ],
        },
        Day {
            date: "Wtorek 11.02",
            motto: "CONTENT SEO #1",
            tasks: &[
                Task {
                    title: "Artykuł SEO #1: \"10 miejsc w Jeleniej Górze, które musisz odwiedzić \
                            zimą 2026\"",
                    details: "800-1200 słów. Linkuj do pinezek na mapie. Słowa kluczowe: \
                              \"Jelenia Góra co zobaczyć\", \"atrakcje Jelenia Góra zima\". \
                              Każde miejsce = link do pinezki.",
                    goal: "Pozycjonowanie na frazy turystyczne, ruch organiczny z Google",
                },
                Task {
                    title: "3 pinezki \"Ciekawostki\" — historia centrum miasta",
                    details: "Ciekawostki historyczne: historia Placu Ratuszowego, wiek \
                              najstarszego budynku, legenda Cieplic. Opis 3-4 zdania + zdjęcie.",
                    goal: "Content o wysokim potencjale wiralowym — ludzie chętnie udostępniają \
                           ciekawostki",
                },
                Task {
                    title: "Post FB: Ciekawostka dnia (typ: edukacyjny)",
                    details: "\"Czy wiesz, że... [ciekawostka z pinezki]? Sprawdź na mapie, gdzie \
                              dokładnie to miejsce się znajduje! [link]\". Dodaj zdjęcie z pinezki.",
                    goal: "Ruch na stronę, budowanie wizerunku \"ciekawego źródła wiedzy o \
                           mieście\"",
                },
                Task {
                    title: "5 maili do firm — paczka weryfikacyjna",
                    details: "Kolejnych 5 firm z mapy — ten sam szablon weryfikacyjny.",
                    goal: "Ciągłość kontaktu z biznesami lokalnymi",
                },
            ],
        },
        Day {
            date: "Środa 12.02",
            motto: "ZGŁOSZENIA & AKTYWIZM OBYWATELSKI",
            tasks: &[
                Task {
                    title: "5 pinezek \"Zgłoszenia\" — realne problemy infrastrukturalne",
                    details: "Przejdź się po mieście lub użyj Google Street View. Znajdź 5 \
                              realnych problemów: dziura w chodniku, zepsuta latarnia, brudna \
                              ściana. Zdjęcie + opis + lokalizacja.",
                    goal: "Pokazanie, że mapa DZIAŁA i służy mieszkańcom — fundament \
                           wiarygodności",
                },
                Task {
                    title: "Post FB: \"Zgłoszenie tygodnia\" (typ: aktywizujący)",
                    details: "\"Ta dziura na ul. [nazwa] czeka na naprawę. Zagłosuj na mapie, \
                              żeby podnieść priorytet! [link]\". Zdjęcie problemu. Wytłumacz \
                              system głosowania.",
                    goal: "Zaangażowanie społeczności + edukacja o głosowaniu na pinezki",
                },
                Task {
                    title: "3 pinezki \"Miejsca\" — usługi codzienne",
                    details: "Dodaj 3 miejsca z kategorii usług: fryzjer, mechanik, apteka. \
                              Pełne dane kontaktowe.",
                    goal: "Rozbudowa bazy o kategorie przydatne na co dzień",
                },
                Task {
                    title: "Mail do Urzędu Miasta Jelenia Góra (instytucja)",
                    details: "\"Prowadzimy interaktywną mapę miasta, na której mieszkańcy \
                              zgłaszają problemy. Chcielibyśmy nawiązać współpracę — czy \
                              zgłoszenia z mapy mogą trafiać do wydziałów? Załączamy przykłady.\"",
                    goal: "Oficjalna legitymizacja projektu, boost zasięgu instytucjonalnego",
                },
                Task {
                    title: "Post FB: Ranking TOP 10 (typ: gamifikacja/społecznościowy)",
                    details: "\"Kto jest na szczycie rankingu naszej mapy? Sprawdź TOP 10 \
                              najaktywniejszych mieszkańców! Każda dodana pinezka to punkty XP i \
                              szansa na odznakę. [link]\" + screenshot rankingu.",
                    goal: "Promowanie rankingu i rywalizacji — motywacja do zakładania kont i \
                           dodawania pinezek",
                },
            ],
        },
        Day {
            date: "Czwartek 13.02",
            motto: "WALENTYNKI PREP & PARTNERSTWA",
            tasks: &[
                Task {
                    title: "Artykuł SEO #2: \"Walentynki w Jeleniej Górze — 7 romantycznych \
                            miejsc na randkę\"",
                    details: "600-900 słów. Linkuj do pinezek restauracji, kawiarni, parków. \
                              Frazy: \"walentynki Jelenia Góra\", \"randka Jelenia Góra\".",
                    goal: "Sezonowe SEO — fraza z dużym ruchem w tym tygodniu",
                },
                Task {
                    title: "5 pinezek \"Miejsca\" — miejsca walentynkowe",
                    details: "Kawiarnie, parki, restauracje z klimatem romantycznym. Kompletne \
                              dane.",
                    goal: "Wspieranie artykułu SEO konkretnymi pinezkami na mapie",
                },
                Task {
                    title: "Post FB: Walentynkowy (typ: sezonowy)",
                    details: "\"Gdzie zabierasz swoją drugą połówkę na walentynki? Sprawdź nasze \
                              TOP 7! [link do artykułu]\".",
                    goal: "Sezonowy boost zasięgu, potencjał udostępnień",
                },
                Task {
                    title: "5 maili do firm — restauracje/kawiarnie",
                    details: "Weryfikacja danych — skup się na gastronomii (kontekst \
                              walentynkowy).",
                    goal: "Firmy walentynkowe mogą udostępnić z wdzięczności za promocję",
                },
                Task {
                    title: "Mail do portalu Jelonka.com (media)",
                    details: "\"Prowadzimy mapę JG. Czy bylibyście zainteresowani cotygodniową \
                              rubryką 'Tydzień na mapie Jeleniej Góry' — zgłoszenia, nowe \
                              miejsca, ciekawostki?\"",
                    goal: "Partnerstwo medialne = ogromny zasięg lokalny",
                },
            ],
        },
        Day {
            date: "Piątek 14.02",
            motto: "WALENTYNKI — SOCIAL PUSH",
            tasks: &[
                Task {
                    title: "Post FB #1: Walentynkowy konkurs UGC (typ: interaktywny)",
                    details: "\"Happy Valentine's! Pokaż SWOJE ulubione miejsce w JG — dodaj je \
                              na mapę i zdobądź odznakę PIERWSZY KROK + 50 XP! Najbardziej \
                              aktywni użytkownicy dnia otrzymają wyróżnienie. [link]\"",
                    goal: "UGC — mieszkańcy sami dodają pinezki + edukacja o systemie XP",
                },
                Task {
                    title: "Post FB #2: Ankieta (typ: engagement)",
                    details: "\"Które miejsce w JG jest najbardziej romantyczne? A) Cieplice \
                              B) Park Norweskiego C) Rynek D) Inne — napisz w komentarzu!\"",
                    goal: "Algorytm FB nagradza komentarze — organiczny zasięg",
                },
                Task {
                    title: "3 pinezki \"Ciekawostki\" — romantyczne/walentynkowe",
                    details: "Ciekawostki romantyczne o mieście — legenda, historia, tradycje.",
                    goal: "Content sezonowy pasujący do dnia",
                },
                Task {
                    title: "5 maili do firm — kontynuacja weryfikacji",
                    details: "Kolejna paczka firm.",
                    goal: "Systematyczność buduje bazę zweryfikowanych danych",
                },
            ],
        },
        Day {
            date: "Sobota 15.02",
            motto: "WEEKEND — LŻEJSZY DZIEŃ",
            tasks: &[
                Task {
                    title: "3 pinezki \"Miejsca\" — weekendowe",
                    details: "Parki, place zabaw, szlaki spacerowe — miejsca na sobotni spacer.",
                    goal: "Content dopasowany do weekendu",
                },
                Task {
                    title: "Post FB: Weekendowa inspiracja (typ: lifestyle)",
                    details: "\"Sobotni spacer? Sprawdź na mapie najlepsze trasy! Podziel się \
                              swoim ulubionym miejscem. A przy okazji — ile XP już zdobyłeś/aś? \
                              Sprawdź swój profil na mapie!\" + link.",
                    goal: "Lżejszy content + przypomnienie o profilu użytkownika i XP",
                },
            ],
        },
        Day {
            date: "Niedziela 16.02",
            motto: "PLANOWANIE & LEKKI CONTENT",
            tasks: &[
                Task {
                    title: "2 pinezki \"Ciekawostki\" — niedzielne",
                    details: "Historia kościołów, tradycje niedzielne w JG.",
                    goal: "Tematyczny content",
                },
                Task {
                    title: "Zaplanuj posty i grafiki na tydzień 2",
                    details: "Przygotuj grafiki i teksty na cały nadchodzący tydzień (Canva). \
                              Uwzględnij grafiki promujące odznaki i ranking.",
                    goal: "Efektywność — nie tracisz czasu w tygodniu na tworzenie",
                },
                Task {
                    title: "Post FB: Niedzielne podsumowanie z elementem gamifikacji",
                    details: "\"Pierwszy tydzień za nami! Na mapie już X pinezek. Kto zdobył \
                              pierwsze odznaki? Sprawdź ranking i zobacz, czy Twoi sąsiedzi Cię \
                              nie wyprzedzają! [link]\"",
                    goal: "Budowanie nawyku niedzielnego podsumowania + gamifikacja",
                },
            ],
        },
    ],
};

const WEEK_2: Week = Week {
    title: "4. Tydzień 2 (17–23 lutego)",
    days: &[
        Day {
            date: "Poniedziałek 17.02",
            motto: "PODSUMOWANIE TYGODNIA 1 & NOWY START",
            tasks: &[
                Task {
                    title: "Post FB: Podsumowanie tygodnia (typ: raport)",
                    details: "\"Tydzień 1: dodano X miejsc, Y ciekawostek, Z zgłoszeń. \
                              Najpopularniejsza pinezka: [nazwa] z X głosami! Użytkownicy \
                              zdobyli łącznie Y odznak. Dołącz!\" + infografika z liczbami.",
                    goal: "Social proof — pokazujesz, że projekt żyje i rośnie",
                },
                Task {
                    title: "5 pinezek \"Miejsca\" — sklepy i usługi",
                    details: "Piekarnie, kwiaciarnie, sklepy z rękodziełem.",
                    goal: "Rozbudowa bazy o kolejne kategorie",
                },
                Task {
                    title: "5 maili do firm — nowa paczka",
                    details: "Kontynuacja weryfikacji danych.",
                    goal: "Systematyczność",
                },
                Task {
                    title: "Mail do Biblioteki Miejskiej (instytucja)",
                    details: "\"Chcielibyśmy dodać wszystkie filie na mapę i zaproponować akcję: \
                              'Mapuj z biblioteką' — warsztaty dodawania pinezek dla seniorów i \
                              młodzieży. Pokażemy onboarding, system odznak i ranking.\"",
                    goal: "Partnerstwo z instytucją + nowa grupa docelowa + pokazanie \
                           onboardingu na żywo",
                },
            ],
        },
        Day {
            date: "Wtorek 18.02",
            motto: "CONTENT SEO #3 & INSTAGRAM",
            tasks: &[
                Task {
                    title: "Artykuł SEO #3: \"Problemy infrastrukturalne w Jeleniej Górze 2026\"",
                    details: "800-1000 słów. Podsumowanie zgłoszeń z mapy, statystyki, zdjęcia. \
                              Wytłumacz jak działa system głosowania i jak mieszkańcy mogą \
                              wpływać na priorytety.",
                    goal: "SEO na frazy problemowe + budowanie wizerunku platformy obywatelskiej",
                },
                Task {
                    title: "5 pinezek \"Zgłoszenia\" — nowa dzielnica",
                    details: "Zgłoszenia z innej dzielnicy niż wcześniej — np. Zabobrze.",
                    goal: "Pokrycie geograficzne miasta",
                },
                Task {
                    title: "Post FB: \"Znasz ten problem?\" (typ: aktywizujący)",
                    details: "Zdjęcie problemu + \"Zagłosuj! Przy 50 głosach pinezka otrzyma \
                              odznakę ZWERYFIKOWANE PRZEZ SPOŁECZNOŚĆ. [link]\".",
                    goal: "Edukacja o systemie weryfikacji społecznej + engagement",
                },
                Task {
                    title: "Założenie konta na Instagramie @jeleniogorzanietomy",
                    details: "Bio: \"Interaktywna mapa Jeleniej Góry. Zgłaszaj, odkrywaj, \
                              zmieniaj! Zdobywaj odznaki i awansuj! jeleniogorzanietomy.pl\". \
                              Link in bio.",
                    goal: "Nowy kanał zasięgu — Instagram idealny do zdjęć miejsc",
                },
            ],
        },
        Day {
            date: "Środa 19.02",
            motto: "INSTAGRAM LAUNCH & DZIELNICE",
            tasks: &[
                Task {
                    title: "3 posty na Instagram — launch",
                    details: "Post 1: Carousel \"5 ukrytych miejsc w JG\". Post 2: Infografika \
                              \"Jak zdobywać odznaki na mapie\" (lista 12 odznak). Post 3: \
                              Screenshot mapy z podpisem \"Ile miejsc znasz?\" Hashtagi: \
                              #JeleniaGora #JeleniogorzanieToMy #MapujemyJG.",
                    goal: "Budowanie contentu na IG + promowanie gamifikacji wizualnie",
                },
                Task {
                    title: "5 pinezek \"Miejsca\" — dzielnica Cieplice",
                    details: "Komplet miejsc z jednej dzielnicy: restauracja, park, apteka, \
                              szkoła, atrakcja.",
                    goal: "Strategia \"dzielnica po dzielnicy\" — kompletne pokrycie",
                },
                Task {
                    title: "Post FB: Cross-promo IG (typ: informacyjny)",
                    details: "\"Jesteśmy na Instagramie! Śledź @jeleniogorzanietomy po codzienną \
                              dawkę JG [link do IG]\".",
                    goal: "Przekierowanie ruchu na nowy kanał",
                },
                Task {
                    title: "5 maili do firm — Cieplice",
                    details: "Firmy z Cieplic — spójność z pinezkami.",
                    goal: "Spójność tematyczna",
                },
            ],
        },
        Day {
            date: "Czwartek 20.02",
            motto: "OUTREACH DO INSTYTUCJI",
            tasks: &[
                Task {
                    title: "Mail do Karkonoskiego Parku Narodowego",
                    details: "\"Dodajemy szlaki i punkty widokowe KPN na mapę JG. Czy \
                              moglibyśmy wykorzystać Państwa opisy? Oferujemy promocję KPN + \
                              odznakę 'Odkrywca Karkonoszy' dla użytkowników odwiedzających \
                              punkty KPN.\"",
                    goal: "Partnerstwo z rozpoznawalną instytucją + pomysł na nową odznakę \
                           tematyczną",
                },
                Task {
                    title: "Maile do 3 lokalnych szkół",
                    details: "\"Proponujemy projekt: uczniowie mapują okolicę. System odznak \
                              motywuje jak gra — zdobywają XP, odznaki i awansują. Uczymy \
                              aktywności obywatelskiej przez technologię.\"",
                    goal: "Szkoły = rodzice = viralowy zasięg + gamifikacja przemawia do \
                           młodzieży",
                },
                Task {
                    title: "3 pinezki \"Ciekawostki\" — przyrodnicze",
                    details: "Ciekawostki przyrodnicze — kontekst KPN.",
                    goal: "Content wspierający outreach do KPN",
                },
                Task {
                    title: "Post FB: \"Czy wiesz, że...?\" (typ: edukacyjny)",
                    details: "Seria \"Czy wiesz, że w JG...\" z ciekawostką przyrodniczą + \
                              \"Dodaj swoją ciekawostkę i odblokuj odznakę WSZECHSTRONNY!\" + \
                              link.",
                    goal: "Edukacja + promowanie odznaki \"Wszechstronny\" (za dodanie każdego \
                           typu pinezki)",
                },
                Task {
                    title: "Post IG: Zdjęcie przyrody z JG",
                    details: "Widok na Karkonosze + \"Dodaj swoje ulubione miejsce z widokiem! \
                              Link in bio.\"",
                    goal: "Budowanie IG, spójność z outreachem",
                },
            ],
        },
        Day {
            date: "Piątek 21.02",
            motto: "COMMUNITY BUILDING & GAMIFIKACJA",
            tasks: &[
                Task {
                    title: "Post FB: PEŁNA PREZENTACJA GAMIFIKACJI (typ: edukacyjny/tutorial)",
                    details: "Długi post z grafiką: \"Jak działa system poziomów i odznak na \
                              naszej mapie?\" Wyjaśnij: XP za pinezki (50), za głosy (2-5), za \
                              zdjęcia (10), za login (5). Pokaż listę 12 odznak od Common do \
                              Legendary. \"Kto pierwszy zdobędzie LEGENDĘ JELENIEJ GÓRY (50 \
                              pinezek)?\"",
                    goal: "Główny post edukacyjny o gamifikacji — punkt odniesienia do \
                           linkowania w przyszłości",
                },
                Task {
                    title: "5 pinezek \"Miejsca\" — dzielnica Zabobrze",
                    details: "Kolejna dzielnica.",
                    goal: "Pokrycie geograficzne",
                },
                Task {
                    title: "5 maili do firm — Zabobrze",
                    details: "Firmy z Zabobrza.",
                    goal: "Spójność z pinezkami",
                },
                Task {
                    title: "Artykuł SEO #4: \"Mapa Jeleniej Góry online — jak zgłosić problem?\"",
                    details: "600-800 słów. Poradnik krok-po-kroku ze screenshotami. Pokaż \
                              onboarding, dodawanie pinezki, głosowanie, profil z XP. Frazy: \
                              \"mapa Jelenia Góra\", \"zgłoś problem Jelenia Góra\".",
                    goal: "SEO na frazy brandowe + tutorial promujący WSZYSTKIE funkcje systemu",
                },
            ],
        },
        Day {
            date: "Sobota 22.02",
            motto: "WEEKEND CONTENT",
            tasks: &[
                Task {
                    title: "3 pinezki \"Miejsca\" — weekendowe",
                    details: "Restauracje z obiadem niedzielnym, kawiarnie, szlaki.",
                    goal: "Użyteczny content weekendowy",
                },
                Task {
                    title: "Post FB: \"Weekendowy spacer z mapą\" (typ: lifestyle)",
                    details: "\"Wydrukuj/otwórz mapę i rusz na spacer! Znajdź 3 miejsca z mapy, \
                              zrób zdjęcie i dodaj je do pinezki — to +10 XP za każde! Kto \
                              zdobędzie odznakę FOTOREPORTER w ten weekend?\"",
                    goal: "Offline engagement + promowanie dodawania zdjęć i odznaki \
                           Fotoreporter",
                },
                Task {
                    title: "Post IG: Stories z mini-quizem",
                    details: "3-4 stories z ankietami o Jeleniej Górze (\"Który budynek jest \
                              starszy?\" itp.).",
                    goal: "Stories mają wysoki reach na IG",
                },
            ],
        },
        Day {
            date: "Niedziela 23.02",
            motto: "ANALIZA & PRZYGOTOWANIA",
            tasks: &[
                Task {
                    title: "2 pinezki \"Ciekawostki\" — niedzielne",
                    details: "Tematyczne ciekawostki.",
                    goal: "Utrzymanie tempa dodawania",
                },
                Task {
                    title: "Analiza wyników tygodnia 1-2",
                    details: "Sprawdź: nowi użytkownicy, pinezki dodane przez innych, reach \
                              postów, odpowiedzi firm, odznaki przyznane, głosy oddane. Zapisz \
                              wnioski.",
                    goal: "Decyzje oparte na danych dla tygodnia 3",
                },
                Task {
                    title: "Post FB: Niedzielne podsumowanie + ranking",
                    details: "\"Koniec tygodnia 2! Ranking TOP 10 — kto prowadzi? [screenshot]. \
                              W tym tygodniu przyznano X odznak! Czy jesteś wśród nich? Sprawdź \
                              swój profil [link]\".",
                    goal: "Cotygodniowy rytuał + ranking jako motywator",
                },
                Task {
                    title: "Przygotowanie grafik na tydzień 3",
                    details: "Canva — szablony: \"odznaka tygodnia\", infografiki, podsumowanie \
                              miesiąca.",
                    goal: "Efektywność",
                },
            ],
        },
    ],
};

const WEEK_3: Week = Week {
    title: "5. Tydzień 3 (24–28 lutego)",
    days: &[
        Day {
            date: "Poniedziałek 24.02",
            motto: "PODSUMOWANIE & WYZWANIE KOŃCA MIESIĄCA",
            tasks: &[
                Task {
                    title: "Post FB: Podsumowanie 2 tygodni + WYZWANIE (typ: raport + CTA)",
                    details: "\"2 tygodnie, X miejsc, Y ciekawostek, Z zgłoszeń! Ale to \
                              początek. WYZWANIE KOŃCA MIESIĄCA: kto do 28 lutego zdobędzie \
                              odznakę AKTYWNY MIESZKANIEC (5 pinezek), wygra wyróżnienie na \
                              stronie głównej! START!\" + infografika.",
                    goal: "Milestone marketing + wyzwanie gamifikacyjne na ostatnie dni miesiąca",
                },
                Task {
                    title: "5 pinezek \"Miejsca\" — Sobieszów/Jagniątków",
                    details: "Kolejna dzielnica.",
                    goal: "Pokrycie peryferiów miasta",
                },
                Task {
                    title: "5 maili do firm — nowa paczka",
                    details: "Kontynuacja.",
                    goal: "Systematyczność",
                },
                Task {
                    title: "Mail do Dolnośląskiej Izby Turystyki (instytucja)",
                    details: "\"Tworzymy mapę turystyczną JG. Czy moglibyśmy zostać w bazie \
                              rekomendowanych serwisów? Oferujemy wzajemną promocję.\"",
                    goal: "Backlink + zasięg w środowisku turystycznym",
                },
            ],
        },
        Day {
            date: "Wtorek 25.02",
            motto: "SEO PUSH — CIEPLICE",
            tasks: &[
                Task {
                    title: "Artykuł SEO #5: \"Cieplice Śląskie-Zdrój — kompletny przewodnik\"",
                    details: "1000-1500 słów. Linkuj do pinezek. Frazy: \"Cieplice Jelenia \
                              Góra\", \"termy Cieplice\", \"co zobaczyć Cieplice\". Wplej \
                              informację o mapie i jak dodawać własne miejsca.",
                    goal: "Cieplice = najczęściej wyszukiwana fraza związana z JG",
                },
                Task {
                    title: "5 pinezek \"Zgłoszenia\" — nowa dzielnica",
                    details: "Zgłoszenia infrastrukturalne z kolejnego obszaru.",
                    goal: "Pokrycie + aktywizm obywatelski",
                },
                Task {
                    title: "Post FB: Teaser artykułu (typ: content promotion)",
                    details: "\"Cieplice — znasz wszystkie sekrety? Kompletny przewodnik [link]. \
                              Dodaj miejsca z Cieplic na mapę i zdobywaj XP!\"",
                    goal: "Ruch na artykuł + CTA do dodawania pinezek",
                },
                Task {
                    title: "Post IG: Carousel Cieplice",
                    details: "5-7 zdjęć z Cieplic + opisy. W ostatnim slajdzie: \"Dodaj swoje \
                              miejsce na mapie — link in bio!\".",
                    goal: "Cross-content z artykułem",
                },
            ],
        },
        Day {
            date: "Środa 26.02",
            motto: "AMBASADORZY & INFLUENCERZY",
            tasks: &[
                Task {
                    title: "Mail do 5 lokalnych mikro-influencerów",
                    details: "Osoby aktywne na FB/IG z JG (500-2000 followersów). \"Szukamy \
                              ambasadorów dzielnic. Dodaj 10 miejsc z okolicy — zdobędziesz \
                              odznakę LOKALNY EKSPERT (Rare!) i wyróżnimy Cię na stronie i w \
                              social mediach.\"",
                    goal: "Ambasadorzy = darmowy zasięg + UGC + gamifikacja jako zachęta",
                },
                Task {
                    title: "5 pinezek \"Miejsca\" — kultura",
                    details: "Muzea, galerie, teatr, kino.",
                    goal: "Nowa kategoria contentu",
                },
                Task {
                    title: "Post FB: \"Zostań ambasadorem dzielnicy\" (typ: rekrutacyjny)",
                    details: "\"Znasz swoją dzielnicę jak nikt? Dodaj 10 miejsc = odznaka \
                              LOKALNY EKSPERT (Rare!). 25 miejsc = KARTOGRAF (Epic!). 50 = \
                              LEGENDA JELENIEJ GÓRY (Legendary!). Kto podejmie wyzwanie? \
                              [link]\" + grafika ścieżki odznak.",
                    goal: "Rekrutacja aktywnych + wizualizacja ścieżki gamifikacyjnej",
                },
                Task {
                    title: "5 maili do firm — kontynuacja",
                    details: "Kolejna paczka weryfikacyjna.",
                    goal: "Systematyczność",
                },
                Task {
                    title: "Post FB: \"Odznaka tygodnia\" (typ: gamifikacja — NOWY FORMAT)",
                    details: "\"ODZNAKA TYGODNIA: WSZECHSTRONNY (Rare!). Jak ją zdobyć? Dodaj \
                              po jednej pinezce każdego typu: Miejsce + Ciekawostka + \
                              Zgłoszenie. To tylko 3 kliknięcia! Kto zdobędzie ją do niedzieli? \
                              [link]\".",
                    goal: "Nowy format cykliczny — cotygodniowa prezentacja jednej odznaki",
                },
            ],
        },
        Day {
            date: "Czwartek 27.02",
            motto: "SPRINT KOŃCOWY",
            tasks: &[
                Task {
                    title: "Artykuł SEO #6: \"Jak mieszkańcy zmieniają Jelenią Górę — historia \
                            naszej mapy\"",
                    details: "600-800 słów. Case study: co zgłoszono, co się zmieniło. Pokaż \
                              system głosowania, rankingi, odznaki. Frazy: \"mapa Jelenia Góra \
                              mieszkańcy\", \"aktywność obywatelska JG\".",
                    goal: "SEO + storytelling + pełna prezentacja funkcji systemu",
                },
                Task {
                    title: "5 pinezek mix — 2 miejsca + 2 ciekawostki + 1 zgłoszenie",
                    details: "Uzupełnienie mapy.",
                    goal: "Finalne pokrycie luk",
                },
                Task {
                    title: "Post FB: Success story (typ: storytelling)",
                    details: "\"Miesiąc temu tego miejsca nie było na mapie. Dziś ma X głosów i \
                              jest ZWERYFIKOWANE PRZEZ SPOŁECZNOŚĆ! Wasza aktywność zmienia \
                              miasto. [link]\" + zdjęcie before/after jeśli możliwe.",
                    goal: "Emocjonalny content + demonstracja systemu weryfikacji społecznej",
                },
                Task {
                    title: "Mail follow-up do firm, które nie odpowiedziały",
                    details: "Przypomnienie: \"Wysłaliśmy wiadomość X dni temu dot. weryfikacji \
                              danych na mapie. Czy mieli Państwo okazję sprawdzić?\"",
                    goal: "Podbicie — zwykle 20-30% odpowiada na follow-up",
                },
                Task {
                    title: "Post IG: Behind the scenes",
                    details: "Screen profilu użytkownika z odznkami + \"Tyle osiągnięć czeka na \
                              Ciebie! Ile odznak zdobędziesz?\".",
                    goal: "Promowanie profilu i odznak na IG",
                },
                Task {
                    title: "Post FB: Aktualizacja wyzwania końca miesiąca (typ: gamifikacja)",
                    details: "\"Do końca wyzwania zostały 2 dni! X osób zdobyło odznakę AKTYWNY \
                              MIESZKANIEC. Czy zdążysz? Potrzebujesz jeszcze Y pinezek! Sprawdź \
                              profil [link]\".",
                    goal: "Urgency + gamifikacja — ostatni push aktywności",
                },
            ],
        },
        Day {
            date: "Piątek 28.02",
            motto: "WIELKIE PODSUMOWANIE MIESIĄCA",
            tasks: &[
                Task {
                    title: "Post FB: PODSUMOWANIE LUTEGO (typ: raport + cel na marzec)",
                    details: "Infografika: ile pinezek, użytkowników, głosów, firm \
                              zweryfikowanych, artykułów, odznak przyznanych, najwyższy poziom. \
                              \"WYNIKI WYZWANIA: [lista zwycięzców]. W marcu nowe odznaki, nowe \
                              wyzwania! [link]\".",
                    goal: "Zamknięcie cyklu, celebration moment, momentum na marzec",
                },
                Task {
                    title: "Post IG: Carousel podsumowanie",
                    details: "Najlepsze momenty miesiąca + statystyki gamifikacji.",
                    goal: "Cross-platform zamknięcie",
                },
                Task {
                    title: "5 maili do firm — ostatnia paczka lutego",
                    details: "Zamknięcie pierwszej fali outreach.",
                    goal: "Dobicie targetu",
                },
                Task {
                    title: "Raport wewnętrzny (nie publikowany)",
                    details: "Spisz: reach postów, odpowiedzi firm, pinezki użytkowników, nowe \
                              rejestracje, aktywność gamifikacji (odznaki, głosy, poziomy), co \
                              zadziałało, co zmienić w marcu.",
                    goal: "Bez analizy nie ma poprawy — dane do planowania marca",
                },
                Task {
                    title: "Artykuł SEO #7: \"Podsumowanie lutego na mapie Jeleniej Góry\"",
                    details: "Podsumowanie z linkami do najciekawszych pinezek. Wzmianka o \
                              systemie odznak i rankingu.",
                    goal: "Evergreen content + linkowanie wewnętrzne",
                },
                Task {
                    title: "Post FB: Zapowiedź marca (typ: teaser)",
                    details: "\"W marcu: nowe odznaki tematyczne, wyzwania dzielnicowe, i coś \
                              czego jeszcze nie widzieliście... Stay tuned! Na początek — \
                              zaloguj się codziennie od 1 marca po 5 XP dziennie!\"",
                    goal: "Podtrzymanie zaangażowania + promowanie daily login XP",
                },
            ],
        },
    ],
};

const SUMMARY: &[SummaryRow] = &[
    SummaryRow {
        metric: "Pinezki \"Miejsca\" dodane przez Ciebie",
        target: "~55-60",
    },
    SummaryRow {
        metric: "Pinezki \"Ciekawostki\"",
        target: "~15-18",
    },
    SummaryRow {
        metric: "Pinezki \"Zgłoszenia\"",
        target: "~15",
    },
    SummaryRow {
        metric: "Artykuły SEO opublikowane",
        target: "6-7",
    },
    SummaryRow {
        metric: "Posty Facebook",
        target: "~25-28 (w tym 6-8 o gamifikacji)",
    },
    SummaryRow {
        metric: "Posty Instagram",
        target: "~8-10",
    },
    SummaryRow {
        metric: "Maile do firm (weryfikacja)",
        target: "~45-50",
    },
    SummaryRow {
        metric: "Maile do instytucji",
        target: "5-7",
    },
    SummaryRow {
        metric: "Maile do influencerów/blogerów",
        target: "5",
    },
    SummaryRow {
        metric: "Dzielnice pokryte na mapie",
        target: "4-5",
    },
    SummaryRow {
        metric: "Konto Instagram założone i aktywne",
        target: "TAK",
    },
    SummaryRow {
        metric: "Posty promujące gamifikację",
        target: "min. 8",
    },
    SummaryRow {
        metric: "Posty promujące ranking",
        target: "min. 3",
    },
    SummaryRow {
        metric: "Posty promujące odznaki",
        target: "min. 4",
    },
    SummaryRow {
        metric: "Posty promujące system głosowania",
        target: "min. 3",
    },
];

const GOALS: &[&str] = &[
    "Min. 10 użytkowników z odznką \"Pierwszy krok\"",
    "Min. 3 użytkowników z odznką \"Aktywny mieszkaniec\"",
    "Min. 1 użytkownik z odznką \"Wszechstronny\"",
    "Min. 100 głosów oddanych łącznie na pinezki",
    "Min. 1 pinezka z odznką \"Zweryfikowane przez społeczność\" (50+ głosów)",
    "Min. 5 użytkowników na poziomie 2 lub wyższym",
    "Ranking TOP 10 wypełniony aktywnymi użytkownikami",
];

const RULES: &[Rule] = &[
    Rule {
        title: "Konsekwencja > intensywność",
        description: "Lepiej robić mniej, ale codziennie, niż dużo raz i potem tydzień przerwy. \
                      Algorytmy social media nagradzają regularność.",
    },
    Rule {
        title: "Każda pinezka = pełne dane",
        description: "Nazwa, adres, opis, zdjęcie, kontakt. Puste pinezki szkodzą wizerunkowi i \
                      nie dają wartości SEO.",
    },
    Rule {
        title: "Każdy artykuł SEO linkuje do min. 5 pinezek",
        description: "Buduje wewnętrzne linkowanie, kieruje ruch na mapę, wzmacnia \
                      pozycjonowanie.",
    },
    Rule {
        title: "Każdy post FB ma CTA (call to action)",
        description: "\"Zagłosuj\", \"dodaj miejsce\", \"sprawdź na mapie\", \"napisz w \
                      komentarzu\", \"sprawdź swój poziom\".",
    },
    Rule {
        title: "Maile do firm wysyłaj rano (8:00-10:00)",
        description: "Najwyższy open rate. Krótki, konkretny temat. Podpis z linkiem do strony.",
    },
    Rule {
        title: "Odpowiadaj na KAŻDY komentarz",
        description: "Algorytm FB promuje posty z dyskusją. Odpowiedź w ciągu 1h podnosi zasięg \
                      o 30-50%.",
    },
    Rule {
        title: "Mierz i zapisuj wyniki",
        description: "Bez danych nie wiesz co działa. Notuj: reach, kliknięcia, nowe \
                      rejestracje, pinezki od użytkowników.",
    },
    Rule {
        title: "Gamifikację promuj minimum 2x w tygodniu",
        description: "Co tydzień: 1 post o odznakach/rankingu, 1 post z wynikami/wyzwaniem. \
                      System jest wartościowy tylko gdy ludzie o nim wiedzą.",
    },
    Rule {
        title: "Używaj screenshotów systemu",
        description: "Pokazuj realne zrzuty ekranu: profil z XP, popup odznaki, ranking TOP 10, \
                      kreator pinezki. Ludzie muszą zobaczyć jak to wygląda.",
    },
    Rule {
        title: "Każdy nowy format postów testuj przez 2 tygodnie",
        description: "\"Odznaka tygodnia\", \"Zgłoszenie tygodnia\", \"Ciekawostka dnia\" — po \
                      2 tygodniach analizuj reach i engagement. Zostaw to co działa.",
    },
];

#[cfg(test)]
mod tests {
    use super::PLAN;

    #[test]
    fn section_counts_match_the_published_plan() {
        assert_eq!(PLAN.legend.len(), 7);
        assert_eq!(PLAN.features.len(), 6);
        assert_eq!(PLAN.weeks.len(), 3);
        assert_eq!(PLAN.summary.len(), 15);
        assert_eq!(PLAN.goals.len(), 7);
        assert_eq!(PLAN.rules.len(), 10);
    }

    #[test]
    fn cover_carries_the_literal_title_strings() {
        assert_eq!(PLAN.cover.title, "Jeleniogórzanie To My");
        assert_eq!(PLAN.cover.subtitle, "Plan Promocji Strony");
        assert_eq!(PLAN.cover.dates, "10–28 lutego 2026");
    }

    #[test]
    fn weeks_cover_the_whole_campaign_range() {
        assert_eq!(PLAN.weeks[0].days.len(), 7);
        assert_eq!(PLAN.weeks[1].days.len(), 7);
        assert_eq!(PLAN.weeks[2].days.len(), 5);
        assert_eq!(PLAN.weeks[0].days[0].date, "Poniedziałek 10.02");
        assert_eq!(PLAN.weeks[2].days[4].date, "Piątek 28.02");
    }
}
