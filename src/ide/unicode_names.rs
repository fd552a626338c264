//! Unicode names accepted inside character sets, canonical name first,
//! followed by its aliases.

/// General categories.
pub(super) const GENERAL_CATEGORIES: &[&[&str]] = &[
    &["Cased_Letter", "LC"],
    &["Close_Punctuation", "Pe"],
    &["Connector_Punctuation", "Pc"],
    &["Control", "Cc", "cntrl"],
    &["Currency_Symbol", "Sc"],
    &["Dash_Punctuation", "Pd"],
    &["Decimal_Number", "Nd"],
    &["Enclosing_Mark", "Me"],
    &["Final_Punctuation", "Pf"],
    &["Format", "Cf"],
    &["Initial_Punctuation", "Pi"],
    &["Letter", "L"],
    &["Letter_Number", "Nl"],
    &["Line_Separator", "Zl"],
    &["Lowercase_Letter", "Ll"],
    &["Mark", "M", "Combining_Mark"],
    &["Math_Symbol", "Sm"],
    &["Modifier_Letter", "Lm"],
    &["Modifier_Symbol", "Sk"],
    &["Nonspacing_Mark", "Mn"],
    &["Number", "N"],
    &["Open_Punctuation", "Ps"],
    &["Other", "C"],
    &["Other_Letter", "Lo"],
    &["Other_Number", "No"],
    &["Other_Punctuation", "Po"],
    &["Other_Symbol", "So"],
    &["Paragraph_Separator", "Zp"],
    &["Private_Use", "Co"],
    &["Punctuation", "P", "punct"],
    &["Separator", "Z"],
    &["Space_Separator", "Zs"],
    &["Spacing_Mark", "Mc"],
    &["Surrogate", "Cs"],
    &["Symbol", "S"],
    &["Titlecase_Letter", "Lt"],
    &["Unassigned", "Cn"],
    &["Uppercase_Letter", "Lu"],
];

/// Scripts, with their ISO 15924 codes.
pub(super) const SCRIPTS: &[&[&str]] = &[
    &["Adlam", "Adlm"],
    &["Ahom"],
    &["Anatolian_Hieroglyphs", "Hluw"],
    &["Arabic", "Arab"],
    &["Armenian", "Armn"],
    &["Avestan", "Avst"],
    &["Balinese", "Bali"],
    &["Bamum", "Bamu"],
    &["Bassa_Vah", "Bass"],
    &["Batak", "Batk"],
    &["Bengali", "Beng"],
    &["Bhaiksuki", "Bhks"],
    &["Bopomofo", "Bopo"],
    &["Brahmi", "Brah"],
    &["Braille", "Brai"],
    &["Buginese", "Bugi"],
    &["Buhid", "Buhd"],
    &["Canadian_Aboriginal", "Cans"],
    &["Carian", "Cari"],
    &["Caucasian_Albanian", "Aghb"],
    &["Chakma", "Cakm"],
    &["Cham"],
    &["Cherokee", "Cher"],
    &["Chorasmian", "Chrs"],
    &["Common", "Zyyy"],
    &["Coptic", "Copt", "Qaac"],
    &["Cuneiform", "Xsux"],
    &["Cypriot", "Cprt"],
    &["Cypro_Minoan", "Cpmn"],
    &["Cyrillic", "Cyrl"],
    &["Deseret", "Dsrt"],
    &["Devanagari", "Deva"],
    &["Dives_Akuru", "Diak"],
    &["Dogra", "Dogr"],
    &["Duployan", "Dupl"],
    &["Egyptian_Hieroglyphs", "Egyp"],
    &["Elbasan", "Elba"],
    &["Elymaic", "Elym"],
    &["Ethiopic", "Ethi"],
    &["Georgian", "Geor"],
    &["Glagolitic", "Glag"],
    &["Gothic", "Goth"],
    &["Grantha", "Gran"],
    &["Greek", "Grek"],
    &["Gujarati", "Gujr"],
    &["Gunjala_Gondi", "Gong"],
    &["Gurmukhi", "Guru"],
    &["Han", "Hani"],
    &["Hangul", "Hang"],
    &["Hanifi_Rohingya", "Rohg"],
    &["Hanunoo", "Hano"],
    &["Hatran", "Hatr"],
    &["Hebrew", "Hebr"],
    &["Hiragana", "Hira"],
    &["Imperial_Aramaic", "Armi"],
    &["Inherited", "Zinh", "Qaai"],
    &["Inscriptional_Pahlavi", "Phli"],
    &["Inscriptional_Parthian", "Prti"],
    &["Javanese", "Java"],
    &["Kaithi", "Kthi"],
    &["Kannada", "Knda"],
    &["Katakana", "Kana"],
    &["Kawi"],
    &["Kayah_Li", "Kali"],
    &["Kharoshthi", "Khar"],
    &["Khitan_Small_Script", "Kits"],
    &["Khmer", "Khmr"],
    &["Khojki", "Khoj"],
    &["Khudawadi", "Sind"],
    &["Lao", "Laoo"],
    &["Latin", "Latn"],
    &["Lepcha", "Lepc"],
    &["Limbu", "Limb"],
    &["Linear_A", "Lina"],
    &["Linear_B", "Linb"],
    &["Lisu"],
    &["Lycian", "Lyci"],
    &["Lydian", "Lydi"],
    &["Mahajani", "Mahj"],
    &["Makasar", "Maka"],
    &["Malayalam", "Mlym"],
    &["Mandaic", "Mand"],
    &["Manichaean", "Mani"],
    &["Marchen", "Marc"],
    &["Masaram_Gondi", "Gonm"],
    &["Medefaidrin", "Medf"],
    &["Meetei_Mayek", "Mtei"],
    &["Mende_Kikakui", "Mend"],
    &["Meroitic_Cursive", "Merc"],
    &["Meroitic_Hieroglyphs", "Mero"],
    &["Miao", "Plrd"],
    &["Modi"],
    &["Mongolian", "Mong"],
    &["Mro", "Mroo"],
    &["Multani", "Mult"],
    &["Myanmar", "Mymr"],
    &["Nabataean", "Nbat"],
    &["Nag_Mundari", "Nagm"],
    &["Nandinagari", "Nand"],
    &["New_Tai_Lue", "Talu"],
    &["Newa"],
    &["Nko", "Nkoo"],
    &["Nushu", "Nshu"],
    &["Nyiakeng_Puachue_Hmong", "Hmnp"],
    &["Ogham", "Ogam"],
    &["Ol_Chiki", "Olck"],
    &["Old_Hungarian", "Hung"],
    &["Old_Italic", "Ital"],
    &["Old_North_Arabian", "Narb"],
    &["Old_Permic", "Perm"],
    &["Old_Persian", "Xpeo"],
    &["Old_Sogdian", "Sogo"],
    &["Old_South_Arabian", "Sarb"],
    &["Old_Turkic", "Orkh"],
    &["Old_Uyghur", "Ougr"],
    &["Oriya", "Orya"],
    &["Osage", "Osge"],
    &["Osmanya", "Osma"],
    &["Pahawh_Hmong", "Hmng"],
    &["Palmyrene", "Palm"],
    &["Pau_Cin_Hau", "Pauc"],
    &["Phags_Pa", "Phag"],
    &["Phoenician", "Phnx"],
    &["Psalter_Pahlavi", "Phlp"],
    &["Rejang", "Rjng"],
    &["Runic", "Runr"],
    &["Samaritan", "Samr"],
    &["Saurashtra", "Saur"],
    &["Sharada", "Shrd"],
    &["Shavian", "Shaw"],
    &["Siddham", "Sidd"],
    &["SignWriting", "Sgnw"],
    &["Sinhala", "Sinh"],
    &["Sogdian", "Sogd"],
    &["Sora_Sompeng", "Sora"],
    &["Soyombo", "Soyo"],
    &["Sundanese", "Sund"],
    &["Syloti_Nagri", "Sylo"],
    &["Syriac", "Syrc"],
    &["Tagalog", "Tglg"],
    &["Tagbanwa", "Tagb"],
    &["Tai_Le", "Tale"],
    &["Tai_Tham", "Lana"],
    &["Tai_Viet", "Tavt"],
    &["Takri", "Takr"],
    &["Tamil", "Taml"],
    &["Tangsa", "Tnsa"],
    &["Tangut", "Tang"],
    &["Telugu", "Telu"],
    &["Thaana", "Thaa"],
    &["Thai"],
    &["Tibetan", "Tibt"],
    &["Tifinagh", "Tfng"],
    &["Tirhuta", "Tirh"],
    &["Toto"],
    &["Ugaritic", "Ugar"],
    &["Unknown", "Zzzz"],
    &["Vai", "Vaii"],
    &["Vithkuqi", "Vith"],
    &["Wancho", "Wcho"],
    &["Warang_Citi", "Wara"],
    &["Yezidi", "Yezi"],
    &["Yi", "Yiii"],
    &["Zanabazar_Square", "Zanb"],
];

/// Unicode blocks.
pub(super) const BLOCKS: &[&[&str]] = &[
    &["InAdlam"],
    &["InAegean_Numbers"],
    &["InAhom"],
    &["InAlchemical_Symbols", "InAlchemical"],
    &["InAlphabetic_Presentation_Forms", "InAlphabetic_PF"],
    &["InAnatolian_Hieroglyphs"],
    &["InAncient_Greek_Musical_Notation", "InAncient_Greek_Music"],
    &["InAncient_Greek_Numbers"],
    &["InAncient_Symbols"],
    &["InArabic"],
    &["InArabic_Extended_A", "InArabic_Ext_A"],
    &["InArabic_Extended_B", "InArabic_Ext_B"],
    &["InArabic_Extended_C", "InArabic_Ext_C"],
    &["InArabic_Mathematical_Alphabetic_Symbols", "InArabic_Math"],
    &["InArabic_Presentation_Forms_A", "InArabic_PF_A", "InArabic_Presentation_Forms_A"],
    &["InArabic_Presentation_Forms_B", "InArabic_PF_B"],
    &["InArabic_Supplement", "InArabic_Sup"],
    &["InArmenian"],
    &["InArrows"],
    &["InAvestan"],
    &["InBalinese"],
    &["InBamum"],
    &["InBamum_Supplement", "InBamum_Sup"],
    &["InBasic_Latin", "InASCII"],
    &["InBassa_Vah"],
    &["InBatak"],
    &["InBengali"],
    &["InBhaiksuki"],
    &["InBlock_Elements"],
    &["InBopomofo"],
    &["InBopomofo_Extended", "InBopomofo_Ext"],
    &["InBox_Drawing"],
    &["InBrahmi"],
    &["InBraille_Patterns", "InBraille"],
    &["InBuginese"],
    &["InBuhid"],
    &["InByzantine_Musical_Symbols", "InByzantine_Music"],
    &["InCarian"],
    &["InCaucasian_Albanian"],
    &["InChakma"],
    &["InCham"],
    &["InCherokee"],
    &["InCherokee_Supplement", "InCherokee_Sup"],
    &["InChess_Symbols"],
    &["InChorasmian"],
    &["InCJK_Compatibility", "InCJK_Compat"],
    &["InCJK_Compatibility_Forms", "InCJK_Compat_Forms"],
    &["InCJK_Compatibility_Ideographs", "InCJK_Compat_Ideographs"],
    &["InCJK_Compatibility_Ideographs_Supplement", "InCJK_Compat_Ideographs_Sup"],
    &["InCJK_Radicals_Supplement", "InCJK_Radicals_Sup"],
    &["InCJK_Strokes"],
    &["InCJK_Symbols_And_Punctuation", "InCJK_Symbols"],
    &["InCJK_Unified_Ideographs", "InCJK"],
    &["InCJK_Unified_Ideographs_Extension_A", "InCJK_Ext_A"],
    &["InCJK_Unified_Ideographs_Extension_B", "InCJK_Ext_B"],
    &["InCJK_Unified_Ideographs_Extension_C", "InCJK_Ext_C"],
    &["InCJK_Unified_Ideographs_Extension_D", "InCJK_Ext_D"],
    &["InCJK_Unified_Ideographs_Extension_E", "InCJK_Ext_E"],
    &["InCJK_Unified_Ideographs_Extension_F", "InCJK_Ext_F"],
    &["InCJK_Unified_Ideographs_Extension_G", "InCJK_Ext_G"],
    &["InCJK_Unified_Ideographs_Extension_H", "InCJK_Ext_H"],
    &["InCombining_Diacritical_Marks", "InDiacriticals"],
    &["InCombining_Diacritical_Marks_Extended", "InDiacriticals_Ext"],
    &[
        "InCombining_Diacritical_Marks_For_Symbols",
        "InDiacriticals_For_Symbols",
        "InCombining_Marks_For_Symbols",
    ],
    &["InCombining_Diacritical_Marks_Supplement", "InDiacriticals_Sup"],
    &["InCombining_Half_Marks", "InHalf_Marks"],
    &["InCommon_Indic_Number_Forms", "InIndic_Number_Forms"],
    &["InControl_Pictures"],
    &["InCoptic"],
    &["InCoptic_Epact_Numbers"],
    &["InCounting_Rod_Numerals", "InCounting_Rod"],
    &["InCuneiform"],
    &["InCuneiform_Numbers_And_Punctuation", "InCuneiform_Numbers"],
    &["InCurrency_Symbols"],
    &["InCypriot_Syllabary"],
    &["InCypro_Minoan"],
    &["InCyrillic"],
    &["InCyrillic_Extended_A", "InCyrillic_Ext_A"],
    &["InCyrillic_Extended_B", "InCyrillic_Ext_B"],
    &["InCyrillic_Extended_C", "InCyrillic_Ext_C"],
    &["InCyrillic_Extended_D", "InCyrillic_Ext_D"],
    &["InCyrillic_Supplement", "InCyrillic_Sup", "InCyrillic_Supplementary"],
    &["InDeseret"],
    &["InDevanagari"],
    &["InDevanagari_Extended", "InDevanagari_Ext"],
    &["InDevanagari_Extended_A", "InDevanagari_Ext_A"],
    &["InDingbats"],
    &["InDives_Akuru"],
    &["InDogra"],
    &["InDomino_Tiles", "InDomino"],
    &["InDuployan"],
    &["InEarly_Dynastic_Cuneiform"],
    &["InEgyptian_Hieroglyph_Format_Controls"],
    &["InEgyptian_Hieroglyphs"],
    &["InElbasan"],
    &["InElymaic"],
    &["InEmoticons"],
    &["InEnclosed_Alphanumeric_Supplement", "InEnclosed_Alphanum_Sup"],
    &["InEnclosed_Alphanumerics", "InEnclosed_Alphanum"],
    &["InEnclosed_CJK_Letters_And_Months", "InEnclosed_CJK"],
    &["InEnclosed_Ideographic_Supplement", "InEnclosed_Ideographic_Sup"],
    &["InEthiopic"],
    &["InEthiopic_Extended", "InEthiopic_Ext"],
    &["InEthiopic_Extended_A", "InEthiopic_Ext_A"],
    &["InEthiopic_Extended_B", "InEthiopic_Ext_B"],
    &["InEthiopic_Supplement", "InEthiopic_Sup"],
    &["InGeneral_Punctuation", "InPunctuation"],
    &["InGeometric_Shapes"],
    &["InGeometric_Shapes_Extended", "InGeometric_Shapes_Ext"],
    &["InGeorgian"],
    &["InGeorgian_Extended", "InGeorgian_Ext"],
    &["InGeorgian_Supplement", "InGeorgian_Sup"],
    &["InGlagolitic"],
    &["InGlagolitic_Supplement", "InGlagolitic_Sup"],
    &["InGothic"],
    &["InGrantha"],
    &["InGreek_And_Coptic", "InGreek"],
    &["InGreek_Extended", "InGreek_Ext"],
    &["InGujarati"],
    &["InGunjala_Gondi"],
    &["InGurmukhi"],
    &["InHalfwidth_And_Fullwidth_Forms", "InHalf_And_Full_Forms"],
    &["InHangul_Compatibility_Jamo", "InCompat_Jamo"],
    &["InHangul_Jamo", "InJamo"],
    &["InHangul_Jamo_Extended_A", "InJamo_Ext_A"],
    &["InHangul_Jamo_Extended_B", "InJamo_Ext_B"],
    &["InHangul_Syllables", "InHangul"],
    &["InHanifi_Rohingya"],
    &["InHanunoo"],
    &["InHatran"],
    &["InHebrew"],
    &["InHigh_Private_Use_Surrogates", "InHigh_PU_Surrogates"],
    &["InHigh_Surrogates"],
    &["InHiragana"],
    &["InIdeographic_Description_Characters", "InIDC"],
    &["InIdeographic_Symbols_And_Punctuation", "InIdeographic_Symbols"],
    &["InImperial_Aramaic"],
    &["InIndic_Siyaq_Numbers"],
    &["InInscriptional_Pahlavi"],
    &["InInscriptional_Parthian"],
    &["InIPA_Extensions", "InIPA_Ext"],
    &["InJavanese"],
    &["InKaithi"],
    &["InKaktovik_Numerals"],
    &["InKana_Extended_A", "InKana_Ext_A"],
    &["InKana_Extended_B", "InKana_Ext_B"],
    &["InKana_Supplement", "InKana_Sup"],
    &["InKanbun"],
    &["InKangxi_Radicals", "InKangxi"],
    &["InKannada"],
    &["InKatakana"],
    &["InKatakana_Phonetic_Extensions", "InKatakana_Ext"],
    &["InKawi"],
    &["InKayah_Li"],
    &["InKharoshthi"],
    &["InKhitan_Small_Script"],
    &["InKhmer"],
    &["InKhmer_Symbols"],
    &["InKhojki"],
    &["InKhudawadi"],
    &["InLao"],
    &["InLatin_1_Supplement", "InLatin_1_Sup", "InLatin_1"],
    &["InLatin_Extended_A", "InLatin_Ext_A"],
    &["InLatin_Extended_Additional", "InLatin_Ext_Additional"],
    &["InLatin_Extended_B", "InLatin_Ext_B"],
    &["InLatin_Extended_C", "InLatin_Ext_C"],
    &["InLatin_Extended_D", "InLatin_Ext_D"],
    &["InLatin_Extended_E", "InLatin_Ext_E"],
    &["InLatin_Extended_F", "InLatin_Ext_F"],
    &["InLatin_Extended_G", "InLatin_Ext_G"],
    &["InLepcha"],
    &["InLetterlike_Symbols"],
    &["InLimbu"],
    &["InLinear_A"],
    &["InLinear_B_Ideograms"],
    &["InLinear_B_Syllabary"],
    &["InLisu"],
    &["InLisu_Supplement", "InLisu_Sup"],
    &["InLow_Surrogates"],
    &["InLycian"],
    &["InLydian"],
    &["InMahajani"],
    &["InMahjong_Tiles", "InMahjong"],
    &["InMakasar"],
    &["InMalayalam"],
    &["InMandaic"],
    &["InManichaean"],
    &["InMarchen"],
    &["InMasaram_Gondi"],
    &["InMathematical_Alphanumeric_Symbols", "InMath_Alphanum"],
    &["InMathematical_Operators", "InMath_Operators"],
    &["InMayan_Numerals"],
    &["InMedefaidrin"],
    &["InMeetei_Mayek"],
    &["InMeetei_Mayek_Extensions", "InMeetei_Mayek_Ext"],
    &["InMende_Kikakui"],
    &["InMeroitic_Cursive"],
    &["InMeroitic_Hieroglyphs"],
    &["InMiao"],
    &["InMiscellaneous_Mathematical_Symbols_A", "InMisc_Math_Symbols_A"],
    &["InMiscellaneous_Mathematical_Symbols_B", "InMisc_Math_Symbols_B"],
    &["InMiscellaneous_Symbols", "InMisc_Symbols"],
    &["InMiscellaneous_Symbols_And_Arrows", "InMisc_Arrows"],
    &["InMiscellaneous_Symbols_And_Pictographs", "InMisc_Pictographs"],
    &["InMiscellaneous_Technical", "InMisc_Technical"],
    &["InModi"],
    &["InModifier_Tone_Letters"],
    &["InMongolian"],
    &["InMongolian_Supplement", "InMongolian_Sup"],
    &["InMro"],
    &["InMultani"],
    &["InMusical_Symbols", "InMusic"],
    &["InMyanmar"],
    &["InMyanmar_Extended_A", "InMyanmar_Ext_A"],
    &["InMyanmar_Extended_B", "InMyanmar_Ext_B"],
    &["InNabataean"],
    &["InNag_Mundari"],
    &["InNandinagari"],
    &["InNew_Tai_Lue"],
    &["InNewa"],
    &["InNKo"],
    &["InNo_Block", "InNB"],
    &["InNumber_Forms"],
    &["InNushu"],
    &["InNyiakeng_Puachue_Hmong"],
    &["InOgham"],
    &["InOl_Chiki"],
    &["InOld_Hungarian"],
    &["InOld_Italic"],
    &["InOld_North_Arabian"],
    &["InOld_Permic"],
    &["InOld_Persian"],
    &["InOld_Sogdian"],
    &["InOld_South_Arabian"],
    &["InOld_Turkic"],
    &["InOld_Uyghur"],
    &["InOptical_Character_Recognition", "InOCR"],
    &["InOriya"],
    &["InOrnamental_Dingbats"],
    &["InOsage"],
    &["InOsmanya"],
    &["InOttoman_Siyaq_Numbers"],
    &["InPahawh_Hmong"],
    &["InPalmyrene"],
    &["InPau_Cin_Hau"],
    &["InPhags_Pa"],
    &["InPhaistos_Disc", "InPhaistos"],
    &["InPhoenician"],
    &["InPhonetic_Extensions", "InPhonetic_Ext"],
    &["InPhonetic_Extensions_Supplement", "InPhonetic_Ext_Sup"],
    &["InPlaying_Cards"],
    &["InPrivate_Use_Area", "InPUA", "InPrivate_Use"],
    &["InPsalter_Pahlavi"],
    &["InRejang"],
    &["InRumi_Numeral_Symbols", "InRumi"],
    &["InRunic"],
    &["InSamaritan"],
    &["InSaurashtra"],
    &["InSharada"],
    &["InShavian"],
    &["InShorthand_Format_Controls"],
    &["InSiddham"],
    &["InSinhala"],
    &["InSinhala_Archaic_Numbers"],
    &["InSmall_Form_Variants", "InSmall_Forms"],
    &["InSmall_Kana_Extension", "InSmall_Kana_Ext"],
    &["InSogdian"],
    &["InSora_Sompeng"],
    &["InSoyombo"],
    &["InSpacing_Modifier_Letters", "InModifier_Letters"],
    &["InSpecials"],
    &["InSundanese"],
    &["InSundanese_Supplement", "InSundanese_Sup"],
    &["InSuperscripts_And_Subscripts", "InSuper_And_Sub"],
    &["InSupplemental_Arrows_A", "InSup_Arrows_A"],
    &["InSupplemental_Arrows_B", "InSup_Arrows_B"],
    &["InSupplemental_Arrows_C", "InSup_Arrows_C"],
    &["InSupplemental_Mathematical_Operators", "InSup_Math_Operators"],
    &["InSupplemental_Punctuation", "InSup_Punctuation"],
    &["InSupplemental_Symbols_And_Pictographs", "InSup_Symbols_And_Pictographs"],
    &["InSupplementary_Private_Use_Area_A", "InSup_PUA_A"],
    &["InSupplementary_Private_Use_Area_B", "InSup_PUA_B"],
    &["InSutton_SignWriting"],
    &["InSyloti_Nagri"],
    &["InSymbols_And_Pictographs_Extended_A", "InSymbols_And_Pictographs_Ext_A"],
    &["InSymbols_For_Legacy_Computing"],
    &["InSyriac"],
    &["InSyriac_Supplement", "InSyriac_Sup"],
    &["InTagalog"],
    &["InTagbanwa"],
    &["InTags"],
    &["InTai_Le"],
    &["InTai_Tham"],
    &["InTai_Viet"],
    &["InTai_Xuan_Jing_Symbols", "InTai_Xuan_Jing"],
    &["InTakri"],
    &["InTamil"],
    &["InTamil_Supplement", "InTamil_Sup"],
    &["InTangsa"],
    &["InTangut"],
    &["InTangut_Components"],
    &["InTangut_Supplement", "InTangut_Sup"],
    &["InTelugu"],
    &["InThaana"],
    &["InThai"],
    &["InTibetan"],
    &["InTifinagh"],
    &["InTirhuta"],
    &["InToto"],
    &["InTransport_And_Map_Symbols", "InTransport_And_Map"],
    &["InUgaritic"],
    &["InUnified_Canadian_Aboriginal_Syllabics", "InUCAS", "InCanadian_Syllabics"],
    &["InUnified_Canadian_Aboriginal_Syllabics_Extended", "InUCAS_Ext"],
    &["InUnified_Canadian_Aboriginal_Syllabics_Extended_A", "InUCAS_Ext_A"],
    &["InVai"],
    &["InVariation_Selectors", "InVS"],
    &["InVariation_Selectors_Supplement", "InVS_Sup"],
    &["InVedic_Extensions", "InVedic_Ext"],
    &["InVertical_Forms"],
    &["InVithkuqi"],
    &["InWancho"],
    &["InWarang_Citi"],
    &["InYezidi"],
    &["InYi_Radicals"],
    &["InYi_Syllables"],
    &["InYijing_Hexagram_Symbols", "InYijing"],
    &["InZanabazar_Square"],
    &["InZnamenny_Musical_Notation", "InZnamenny_Music"],
];

/// Binary Unicode properties.
pub(super) const PROPERTIES: &[&[&str]] = &[
    &["Alphabetic", "Alpha"],
    &["Any"],
    &["ASCII"],
    &["ASCII_Hex_Digit", "AHex"],
    &["Assigned"],
    &["Bidi_Control", "Bidi_C"],
    &["Bidi_Mirrored", "Bidi_M"],
    &["Case_Ignorable", "CI"],
    &["Cased"],
    &["Changes_When_Casefolded", "CWCF"],
    &["Changes_When_Casemapped", "CWCM"],
    &["Changes_When_Lowercased", "CWL"],
    &["Changes_When_NFKC_Casefolded", "CWKCF"],
    &["Changes_When_Titlecased", "CWT"],
    &["Changes_When_Uppercased", "CWU"],
    &["Dash"],
    &["Default_Ignorable_Code_Point", "DI"],
    &["Deprecated", "Dep"],
    &["Diacritic", "Dia"],
    &["Emoji"],
    &["Emoji_Component", "EComp"],
    &["Emoji_Modifier", "EMod"],
    &["Emoji_Modifier_Base", "EBase"],
    &["Emoji_Presentation", "EPres"],
    &["Extended_Pictographic", "ExtPict"],
    &["Extender", "Ext"],
    &["Grapheme_Base", "Gr_Base"],
    &["Grapheme_Extend", "Gr_Ext"],
    &["Hex_Digit", "Hex"],
    &["ID_Continue", "IDC"],
    &["ID_Start", "IDS"],
    &["Ideographic", "Ideo"],
    &["IDS_Binary_Operator", "IDSB"],
    &["IDS_Trinary_Operator", "IDST"],
    &["Join_Control", "Join_C"],
    &["Logical_Order_Exception", "LOE"],
    &["Lowercase", "Lower"],
    &["Math"],
    &["Noncharacter_Code_Point", "NChar"],
    &["Pattern_Syntax", "Pat_Syn"],
    &["Pattern_White_Space", "Pat_WS"],
    &["Quotation_Mark", "QMark"],
    &["Radical"],
    &["Regional_Indicator", "RI"],
    &["Sentence_Terminal", "STerm"],
    &["Soft_Dotted", "SD"],
    &["Terminal_Punctuation", "Term"],
    &["Unified_Ideograph", "UIdeo"],
    &["Uppercase", "Upper"],
    &["Variation_Selector", "VS"],
    &["White_Space", "space"],
    &["XID_Continue", "XIDC"],
    &["XID_Start", "XIDS"],
];
