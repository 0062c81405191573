//! Signatures for the `_WinAPI_*` UDFs.

use super::signature::{Param, Signature};

macro_rules! winapi {
    ($(
        $name:literal => $doc:literal,
        $label:literal,
        [$($plabel:literal: $pdoc:literal),* $(,)?];
    )*) => {
        &[$((
            $name,
            Signature {
                documentation: $doc,
                label: $label,
                params: &[$(Param { label: $plabel, documentation: $pdoc }),*],
            },
        )),*]
    };
}

pub(super) static WINAPI: &[(&str, Signature)] = winapi! {
    "_WinAPI_AbortPath" => "Closes and discards any paths in the specified device context",
        "_WinAPI_AbortPath ( $hDC )",
        [
            "$hDC": "Handle to the device context from which a path will be discarded",
        ];

    "_WinAPI_ActivateKeyboardLayout" => "Sets the input locale identifier for the calling thread or the current process",
        "_WinAPI_ActivateKeyboardLayout ( $hLocale [, $iFlag = 0] )",
        [
            "$hLocale": "The input locale identifier to be activated, or $HKL_NEXT or $HKL_PREV",
            "$iFlag": "**[optional]** The flag that specifies how the input locale identifier is to be activated, e.g. $KLF_REORDER, $KLF_RESET or $KLF_SETFORPROCESS",
        ];

    "_WinAPI_AddClipboardFormatListener" => "Places the given window in the system-maintained clipboard format listener list",
        "_WinAPI_AddClipboardFormatListener ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be placed in the clipboard format listener list",
        ];

    "_WinAPI_AddFontMemResourceEx" => "Adds the font resource from a memory image to the system",
        "_WinAPI_AddFontMemResourceEx ( $pData, $iSize )",
        [
            "$pData": "A pointer to a font resource",
            "$iSize": "The number of bytes in the font resource that is pointed to by $pData",
        ];

    "_WinAPI_AddFontResourceEx" => "Adds the font resource from the specified file to the system",
        "_WinAPI_AddFontResourceEx ( $sFont [, $iFlag = 0 [, $bNotify = False]] )",
        [
            "$sFont": "The name of the font file, or a list of font files separated by \"|\"",
            "$iFlag": "**[optional]** The characteristics of the font to be added to the system, $FR_NOT_ENUM or $FR_PRIVATE",
            "$bNotify": "**[optional]** Specifies whether to send the $WM_FONTCHANGE message to all top-level windows",
        ];

    "_WinAPI_AddIconOverlay" => "Creates an icon by adding an overlay to the specified icon",
        "_WinAPI_AddIconOverlay ( $hIcon, $hOverlay, $fScale [, $iX = 0 [, $iY = 0]] )",
        [
            "$hIcon": "Handle to the source icon",
            "$hOverlay": "Handle to the icon to use as an overlay",
            "$fScale": "The coefficient of scaling the overlay icon, from 0 to 1",
            "$iX": "**[optional]** The x-coordinate of the overlay icon",
            "$iY": "**[optional]** The y-coordinate of the overlay icon",
        ];

    "_WinAPI_AddMRUString" => "Adds a string to the top of the most recently used (MRU) list",
        "_WinAPI_AddMRUString ( $hMRU, $sStr )",
        [
            "$hMRU": "Handle of the MRU list",
            "$sStr": "The string to be added",
        ];

    "_WinAPI_AdjustBitmap" => "Creates a new device-independent bitmap (DIB) from the specified bitmap, scaling and adjusting its colors",
        "_WinAPI_AdjustBitmap ( $hBitmap, $iWidth, $iHeight [, $iMode = 3 [, $tAdjustment = 0]] )",
        [
            "$hBitmap": "Handle to the source bitmap",
            "$iWidth": "The width of the new bitmap. If -1, the source width is used.",
            "$iHeight": "The height of the new bitmap. If -1, the source height is used.",
            "$iMode": "**[optional]** The stretching mode, e.g. $BLACKONWHITE, $COLORONCOLOR or $HALFTONE",
            "$tAdjustment": "**[optional]** $tagCOLORADJUSTMENT structure that contains the color adjustment values",
        ];

    "_WinAPI_AdjustTokenPrivileges" => "Enables or disables privileges in the specified access token",
        "_WinAPI_AdjustTokenPrivileges ( $hToken, $aPrivileges, $iAttributes, ByRef $aAdjust )",
        [
            "$hToken": "Handle to the access token that contains the privileges to be modified",
            "$aPrivileges": "The privilege name or an array of privilege names, or $SE_PRIVILEGE_REMOVED to disable all privileges",
            "$iAttributes": "The privilege attributes, e.g. $SE_PRIVILEGE_ENABLED, $SE_PRIVILEGE_ENABLED_BY_DEFAULT or $SE_PRIVILEGE_REMOVED",
            "$aAdjust": "Array that receives the previous state of the modified privileges",
        ];

    "_WinAPI_AdjustWindowRectEx" => "Calculates the required size of the window rectangle, based on the desired size of the client rectangle",
        "_WinAPI_AdjustWindowRectEx ( ByRef $tRECT, $iStyle [, $iExStyle = 0 [, $bMenu = False]] )",
        [
            "$tRECT": "$tagRECT structure that contains the coordinates of the desired client area",
            "$iStyle": "The window style of the window whose required size is to be calculated",
            "$iExStyle": "**[optional]** The extended window style of the window whose required size is to be calculated",
            "$bMenu": "**[optional]** Specifies whether the window has a menu",
        ];

    "_WinAPI_AllowSetForegroundWindow" => "Enables the specified process to set the foreground window",
        "_WinAPI_AllowSetForegroundWindow ( [$iPID = -1] )",
        [
            "$iPID": "**[optional]** The identifier of the process that will be enabled to set the foreground window. If -1, all processes are enabled.",
        ];

    "_WinAPI_AlphaBlend" => "Displays bitmaps that have transparent or semitransparent pixels",
        "_WinAPI_AlphaBlend ( $hDestDC, $iXDest, $iYDest, $iWidthDest, $iHeightDest, $hSrcDC, $iXSrc, $iYSrc, $iWidthSrc, $iHeightSrc, $iAlpha [, $bAlpha = False] )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$iXDest": "The x-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iYDest": "The y-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iWidthDest": "The width, in logical units, of the destination rectangle",
            "$iHeightDest": "The height, in logical units, of the destination rectangle",
            "$hSrcDC": "Handle to the source device context",
            "$iXSrc": "The x-coordinate, in logical units, of the upper-left corner of the source rectangle",
            "$iYSrc": "The y-coordinate, in logical units, of the upper-left corner of the source rectangle",
            "$iWidthSrc": "The width, in logical units, of the source rectangle",
            "$iHeightSrc": "The height, in logical units, of the source rectangle",
            "$iAlpha": "The alpha transparency value to be used on the entire source bitmap, 0 to 255",
            "$bAlpha": "**[optional]** Specifies whether the bitmap uses per-pixel alpha values",
        ];

    "_WinAPI_AngleArc" => "Draws a line segment and an arc",
        "_WinAPI_AngleArc ( $hDC, $iX, $iY, $iRadius, $nStartAngle, $nSweepAngle )",
        [
            "$hDC": "Handle to a device context",
            "$iX": "The x-coordinate, in logical units, of the center of the circle",
            "$iY": "The y-coordinate, in logical units, of the center of the circle",
            "$iRadius": "The radius, in logical units, of the circle",
            "$nStartAngle": "The start angle, in degrees, relative to the x-axis",
            "$nSweepAngle": "The sweep angle, in degrees, relative to the starting angle",
        ];

    "_WinAPI_AnimateWindow" => "Enables you to produce special effects when showing or hiding windows",
        "_WinAPI_AnimateWindow ( $hWnd, $iFlags [, $iDuration = 1000] )",
        [
            "$hWnd": "Handle to the window to animate",
            "$iFlags": "The type of animation, e.g. $AW_ACTIVATE, $AW_BLEND, $AW_CENTER, $AW_HIDE, $AW_HOR_POSITIVE or $AW_SLIDE",
            "$iDuration": "**[optional]** The time it takes to play the animation, in milliseconds",
        ];

    "_WinAPI_Arc" => "Draws an elliptical arc",
        "_WinAPI_Arc ( $hDC, $tRECT, $iXStartArc, $iYStartArc, $iXEndArc, $iYEndArc )",
        [
            "$hDC": "Handle to the device context where drawing occurs",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the bounding rectangle",
            "$iXStartArc": "The x-coordinate, in logical units, of the ending point of the radial line defining the starting point of the arc",
            "$iYStartArc": "The y-coordinate, in logical units, of the ending point of the radial line defining the starting point of the arc",
            "$iXEndArc": "The x-coordinate, in logical units, of the ending point of the radial line defining the ending point of the arc",
            "$iYEndArc": "The y-coordinate, in logical units, of the ending point of the radial line defining the ending point of the arc",
        ];

    "_WinAPI_ArcTo" => "Draws an elliptical arc and updates the current position",
        "_WinAPI_ArcTo ( $hDC, $tRECT, $iXRadial1, $iYRadial1, $iXRadial2, $iYRadial2 )",
        [
            "$hDC": "Handle to the device context where drawing occurs",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the bounding rectangle",
            "$iXRadial1": "The x-coordinate, in logical units, of the endpoint of the radial defining the starting point of the arc",
            "$iYRadial1": "The y-coordinate, in logical units, of the endpoint of the radial defining the starting point of the arc",
            "$iXRadial2": "The x-coordinate, in logical units, of the endpoint of the radial defining the ending point of the arc",
            "$iYRadial2": "The y-coordinate, in logical units, of the endpoint of the radial defining the ending point of the arc",
        ];

    "_WinAPI_ArrayToStruct" => "Converts an array of strings to the structure",
        "_WinAPI_ArrayToStruct ( Const ByRef $aData [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$aData": "The array to convert. Each element of the array will be stored as a null-terminated string.",
            "$iStart": "**[optional]** The index of array to start conversion at",
            "$iEnd": "**[optional]** The index of array to stop conversion at",
        ];

    "_WinAPI_AssignProcessToJobObject" => "Assigns a process to an existing job object",
        "_WinAPI_AssignProcessToJobObject ( $hJob, $hProcess )",
        [
            "$hJob": "Handle to the job object to which the process will be associated",
            "$hProcess": "Handle to the process to associate with the job object",
        ];

    "_WinAPI_AssocGetPerceivedType" => "Retrieves a file's perceived type based on its extension",
        "_WinAPI_AssocGetPerceivedType ( $sExt )",
        [
            "$sExt": "The file's extension. This should include the leading period, e.g. \".txt\".",
        ];

    "_WinAPI_AssocQueryString" => "Searches for and retrieves a file association-related string from the registry",
        "_WinAPI_AssocQueryString ( $sAssoc, $iType [, $iFlags = 0 [, $sExtra = '']] )",
        [
            "$sAssoc": "The string that is used to determine the root key, e.g. a file name extension, a PROGID or a CLSID",
            "$iType": "The type of string that is to be returned, e.g. $ASSOCSTR_COMMAND, $ASSOCSTR_EXECUTABLE, $ASSOCSTR_FRIENDLYDOCNAME or $ASSOCSTR_DEFAULTICON",
            "$iFlags": "**[optional]** The flags that can be used to control the search, e.g. $ASSOCF_INIT_NOREMAPCLSID or $ASSOCF_NOTRUNCATE",
            "$sExtra": "**[optional]** An optional string with additional information about the location of the string",
        ];

    "_WinAPI_AttachConsole" => "Attaches the calling process to the console of the specified process",
        "_WinAPI_AttachConsole ( [$iPID = -1] )",
        [
            "$iPID": "**[optional]** Identifier of the process. Set to -1 to attach to the console of the parent process.",
        ];

    "_WinAPI_AttachThreadInput" => "Attaches the input processing mechanism of one thread to that of another thread",
        "_WinAPI_AttachThreadInput ( $iAttach, $iAttachTo, $bAttach )",
        [
            "$iAttach": "Identifier of the thread to be attached to another thread",
            "$iAttachTo": "Identifier of the thread to be attached to",
            "$bAttach": "Attachment mode:\n    True - The threads are attached\n    False - The threads are detached",
        ];

    "_WinAPI_Beep" => "Generates simple tones on the speaker",
        "_WinAPI_Beep ( [$iFreq = 500 [, $iDuration = 1000]] )",
        [
            "$iFreq": "**[optional]** The frequency of the sound, in hertz. This parameter must be in the range 37 through 32,767.",
            "$iDuration": "**[optional]** The duration of the sound, in milliseconds.",
        ];

    "_WinAPI_BeginDeferWindowPos" => "Allocates memory for a multiple-window-position structure",
        "_WinAPI_BeginDeferWindowPos ( [$iAmount = 1] )",
        [
            "$iAmount": "**[optional]** The initial number of windows for which to store position information",
        ];

    "_WinAPI_BeginPaint" => "Prepares the specified window for painting",
        "_WinAPI_BeginPaint ( $hWnd, ByRef $tPAINTSTRUCT )",
        [
            "$hWnd": "Handle to the window to be repainted",
            "$tPAINTSTRUCT": "$tagPAINTSTRUCT structure that will receive painting information",
        ];

    "_WinAPI_BeginPath" => "Opens a path bracket in the specified device context",
        "_WinAPI_BeginPath ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_BeginUpdateResource" => "Retrieves a handle that can be used by the _WinAPI_UpdateResource() function to add, delete, or replace resources in a binary module",
        "_WinAPI_BeginUpdateResource ( $sFilePath [, $bDelete = False] )",
        [
            "$sFilePath": "The binary file in which to update resources",
            "$bDelete": "**[optional]** Specifies whether to delete the existing resources",
        ];

    "_WinAPI_BitBlt" => "Performs a bit-block transfer of color data",
        "_WinAPI_BitBlt ( $hDestDC, $iXDest, $iYDest, $iWidth, $iHeight, $hSrcDC, $iXSrc, $iYSrc, $iROP )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$iXDest": "X value of the upper-left corner of the destination rectangle",
            "$iYDest": "Y value of the upper-left corner of the destination rectangle",
            "$iWidth": "Width of the source and destination rectangles",
            "$iHeight": "Height of the source and destination rectangles",
            "$hSrcDC": "Handle to the source device context",
            "$iXSrc": "X value of the upper-left corner of the source rectangle",
            "$iYSrc": "Y value of the upper-left corner of the source rectangle",
            "$iROP": "Specifies a raster operation code:\n    $BLACKNESS - Fills the destination rectangle using the color associated with palette index 0\n    $CAPTUREBLT - Includes any window that are layered on top of your window in the resulting image\n    $DSTINVERT - Inverts the destination rectangle\n    $MERGECOPY - Merges the color of the source rectangle with the brush currently selected in hDest, by using the AND operator\n    $NOTSRCCOPY - Copies the inverted source rectangle to the destination rectangle\n    $SRCCOPY - Copies the source rectangle directly to the destination rectangle\n    $SRCINVERT - Combines the colors of the source and destination rectangles by using the XOR operator\n    $WHITENESS - Fills the destination rectangle using the color associated with index 1",
        ];

    "_WinAPI_BlockInput" => "Blocks keyboard and mouse input events from reaching applications",
        "_WinAPI_BlockInput ( $bBlock )",
        [
            "$bBlock": "Specifies whether to block or unblock input",
        ];

    "_WinAPI_BringWindowToTop" => "Brings the specified window to the top of the Z order",
        "_WinAPI_BringWindowToTop ( $hWnd )",
        [
            "$hWnd": "Handle to the window to bring to the top of the Z order",
        ];

    "_WinAPI_BroadcastSystemMessage" => "Sends a message to the specified recipients",
        "_WinAPI_BroadcastSystemMessage ( $iMsg [, $wParam = 0 [, $lParam = 0 [, $iFlags = 0 [, $iRecipients = 0]]]] )",
        [
            "$iMsg": "The message to be sent",
            "$wParam": "**[optional]** Additional message-specific information",
            "$lParam": "**[optional]** Additional message-specific information",
            "$iFlags": "**[optional]** The broadcast option, e.g. $BSF_FORCEIFHUNG, $BSF_IGNORECURRENTTASK, $BSF_NOHANG or $BSF_POSTMESSAGE",
            "$iRecipients": "**[optional]** The information about the recipients of the message, e.g. $BSM_ALLCOMPONENTS, $BSM_ALLDESKTOPS or $BSM_APPLICATIONS",
        ];

    "_WinAPI_BrowseForFolderDlg" => "Displays a dialog box that enables the user to select a Shell folder",
        "_WinAPI_BrowseForFolderDlg ( [$sRoot = '' [, $sText = '' [, $iFlags = 0 [, $pBrowseProc = 0 [, $lParam = 0 [, $hParent = 0]]]]]] )",
        [
            "$sRoot": "**[optional]** The root folder from which to start browsing",
            "$sText": "**[optional]** The string that is displayed above the tree view control in the dialog box",
            "$iFlags": "**[optional]** The flags that specify the options for the dialog box, e.g. $BIF_EDITBOX, $BIF_NEWDIALOGSTYLE or $BIF_RETURNONLYFSDIRS",
            "$pBrowseProc": "**[optional]** The address of a BrowseCallbackProc() function that the dialog box calls when an event occurs",
            "$lParam": "**[optional]** An application-defined value that the dialog box passes to the callback function",
            "$hParent": "**[optional]** Handle to the owner window for the dialog box",
        ];

    "_WinAPI_BufferedPaintInit" => "Initialize buffered painting for the current thread",
        "_WinAPI_BufferedPaintInit ( )",
        [];

    "_WinAPI_BufferedPaintUnInit" => "Closes down buffered painting for the current thread",
        "_WinAPI_BufferedPaintUnInit ( )",
        [];

    "_WinAPI_CallNextHookEx" => "Passes the hook information to the next hook procedure in the current hook chain",
        "_WinAPI_CallNextHookEx ( $hHook, $iCode, $wParam, $lParam )",
        [
            "$hHook": "This parameter is ignored",
            "$iCode": "Specifies the hook code passed to the current hook procedure",
            "$wParam": "Specifies the wParam value passed to the current hook procedure",
            "$lParam": "Specifies the lParam value passed to the current hook procedure",
        ];

    "_WinAPI_CallWindowProc" => "Passes message information to the specified window procedure",
        "_WinAPI_CallWindowProc ( $pPrevWndFunc, $hWnd, $iMsg, $wParam, $lParam )",
        [
            "$pPrevWndFunc": "Pointer to the previous window procedure",
            "$hWnd": "Handle to the window procedure to receive the message",
            "$iMsg": "Specifies the message",
            "$wParam": "Specifies additional message-specific information",
            "$lParam": "Specifies additional message-specific information",
        ];

    "_WinAPI_CancelWaitableTimer" => "Sets the specified waitable timer to the inactive state",
        "_WinAPI_CancelWaitableTimer ( $hTimer )",
        [
            "$hTimer": "Handle to the timer object",
        ];

    "_WinAPI_CascadeWindows" => "Cascades the specified child windows of the specified parent window",
        "_WinAPI_CascadeWindows ( $aWnds [, $tRECT = 0 [, $hParent = 0 [, $iFlags = 0 [, $iStart = 0 [, $iEnd = -1]]]]] )",
        [
            "$aWnds": "The array of handles to the child windows to arrange",
            "$tRECT": "**[optional]** $tagRECT structure that specifies the rectangular area, in client coordinates, within which the windows are arranged",
            "$hParent": "**[optional]** Handle to the parent window. If 0, the desktop window is used.",
            "$iFlags": "**[optional]** A cascade flag, $MDITILE_SKIPDISABLED or $MDITILE_ZORDER",
            "$iStart": "**[optional]** The index of array to start arranging at",
            "$iEnd": "**[optional]** The index of array to stop arranging at",
        ];

    "_WinAPI_ChangeWindowMessageFilterEx" => "Modifies the User Interface Privilege Isolation (UIPI) message filter for a specified window",
        "_WinAPI_ChangeWindowMessageFilterEx ( $hWnd, $iMsg, $iAction )",
        [
            "$hWnd": "Handle to the window whose UIPI message filter is to be modified. If 0, the process message filter is modified.",
            "$iMsg": "The message that the message filter allows through or blocks",
            "$iAction": "The action to be performed, $MSGFLT_ALLOW, $MSGFLT_DISALLOW or $MSGFLT_RESET",
        ];

    "_WinAPI_CharToOem" => "Converts a string into the OEM-defined character set",
        "_WinAPI_CharToOem ( $sStr )",
        [
            "$sStr": "The string to convert",
        ];

    "_WinAPI_Check" => "Displays an error message if the condition is true",
        "_WinAPI_Check ( $sFunction, $bError, $vError [, $bTranslate = False] )",
        [
            "$sFunction": "Name of the function which failed",
            "$bError": "Error condition. If True, the error message is displayed.",
            "$vError": "Error code or message to display",
            "$bTranslate": "**[optional]** Specifies whether to translate the error code using _WinAPI_GetLastErrorMessage()",
        ];

    "_WinAPI_ChildWindowFromPoint" => "Determines which, if any, of the child windows belonging to a parent window contains the specified point",
        "_WinAPI_ChildWindowFromPoint ( $hWnd, $tPOINT )",
        [
            "$hWnd": "Handle to the parent window",
            "$tPOINT": "$tagPOINT structure that defines the client coordinates of the point to be checked",
        ];

    "_WinAPI_ChildWindowFromPointEx" => "Determines which, if any, of the child windows belonging to the specified parent window contains the specified point",
        "_WinAPI_ChildWindowFromPointEx ( $hWnd, $tPOINT [, $iFlags = 0] )",
        [
            "$hWnd": "Handle to the parent window",
            "$tPOINT": "$tagPOINT structure that defines the client coordinates of the point to be checked",
            "$iFlags": "**[optional]** The child windows to be skipped, e.g. $CWP_ALL, $CWP_SKIPDISABLED, $CWP_SKIPINVISIBLE or $CWP_SKIPTRANSPARENT",
        ];

    "_WinAPI_ChooseColor" => "Creates a Color dialog box that enables the user to select a color",
        "_WinAPI_ChooseColor ( [$iReturnType = 0 [, $iColorRef = 0 [, $iRefType = 0 [, $hWndOwnder = 0]]]] )",
        [
            "$iReturnType": "**[optional]** Determines return type:\n    0 - COLORREF rgbcolor\n    1 - BGR hex\n    2 - RGB hex",
            "$iColorRef": "**[optional]** Default selected color",
            "$iRefType": "**[optional]** Type of $iColorRef passed in:\n    0 - COLORREF rgbcolor\n    1 - BGR hex\n    2 - RGB hex",
            "$hWndOwnder": "**[optional]** Handle to the window that owns the dialog box",
        ];

    "_WinAPI_ChooseFont" => "Creates a Font dialog box that enables the user to choose attributes for a logical font",
        "_WinAPI_ChooseFont ( [$sFontName = \"Courier New\" [, $iPointSize = 10 [, $iFontColorRef = 0 [, $iFontWeight = 0 [, $bItalic = False [, $bUnderline = False [, $bStrikethru = False [, $hWndOwner = 0]]]]]]]] )",
        [
            "$sFontName": "**[optional]** Default font name",
            "$iPointSize": "**[optional]** Pointsize of font",
            "$iFontColorRef": "**[optional]** COLORREF rgbColors",
            "$iFontWeight": "**[optional]** Font weight",
            "$bItalic": "**[optional]** Italic",
            "$bUnderline": "**[optional]** Underline",
            "$bStrikethru": "**[optional]** Strikethru",
            "$hWndOwner": "**[optional]** Handle to the window that owns the dialog box",
        ];

    "_WinAPI_Chord" => "Draws a chord (a region bounded by the intersection of an ellipse and a line segment, called a secant)",
        "_WinAPI_Chord ( $hDC, $tRECT, $iXRadial1, $iYRadial1, $iXRadial2, $iYRadial2 )",
        [
            "$hDC": "Handle to the device context in which the chord appears",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the bounding rectangle",
            "$iXRadial1": "The x-coordinate, in logical units, of the endpoint of the radial defining the beginning of the chord",
            "$iYRadial1": "The y-coordinate, in logical units, of the endpoint of the radial defining the beginning of the chord",
            "$iXRadial2": "The x-coordinate, in logical units, of the endpoint of the radial defining the end of the chord",
            "$iYRadial2": "The y-coordinate, in logical units, of the endpoint of the radial defining the end of the chord",
        ];

    "_WinAPI_ClientToScreen" => "Converts the client coordinates of a specified point to screen coordinates",
        "_WinAPI_ClientToScreen ( $hWnd, ByRef $tPoint )",
        [
            "$hWnd": "Identifies the window that will be used for the conversion",
            "$tPoint": "$tagPOINT structure that contains the client coordinates to be converted",
        ];

    "_WinAPI_ClipCursor" => "Confines the cursor to a rectangular area on the screen",
        "_WinAPI_ClipCursor ( $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the screen coordinates of the confining rectangle. If 0, the cursor is free to move anywhere on the screen.",
        ];

    "_WinAPI_CloseDesktop" => "Closes an open handle to a desktop object",
        "_WinAPI_CloseDesktop ( $hDesktop )",
        [
            "$hDesktop": "Handle to the desktop to be closed",
        ];

    "_WinAPI_CloseEnhMetaFile" => "Closes an enhanced-metafile device context and returns a handle that identifies an enhanced-format metafile",
        "_WinAPI_CloseEnhMetaFile ( $hDC )",
        [
            "$hDC": "Handle to an enhanced-metafile device context",
        ];

    "_WinAPI_CloseFigure" => "Closes an open figure in a path",
        "_WinAPI_CloseFigure ( $hDC )",
        [
            "$hDC": "Handle to the device context in which the figure will be closed",
        ];

    "_WinAPI_CloseHandle" => "Closes an open object handle",
        "_WinAPI_CloseHandle ( $hObject )",
        [
            "$hObject": "Handle of object to close",
        ];

    "_WinAPI_CloseThemeData" => "Closes the theme data handle",
        "_WinAPI_CloseThemeData ( $hTheme )",
        [
            "$hTheme": "Handle to a window's specified theme data",
        ];

    "_WinAPI_CloseWindow" => "Minimizes (but does not destroy) the specified window",
        "_WinAPI_CloseWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be minimized",
        ];

    "_WinAPI_CloseWindowStation" => "Closes an open window station handle",
        "_WinAPI_CloseWindowStation ( $hStation )",
        [
            "$hStation": "Handle to the window station to be closed",
        ];

    "_WinAPI_CLSIDFromProgID" => "Looks up a CLSID in the registry, given a ProgID",
        "_WinAPI_CLSIDFromProgID ( $sProgID )",
        [
            "$sProgID": "The string containing the ProgID whose CLSID is requested",
        ];

    "_WinAPI_CoInitialize" => "Initializes the COM library for use by the calling thread",
        "_WinAPI_CoInitialize ( [$iFlags = 0] )",
        [
            "$iFlags": "**[optional]** The concurrency model and initialization options for the thread:\n    $COINIT_APARTMENTTHREADED\n    $COINIT_MULTITHREADED\n    $COINIT_DISABLE_OLE1DDE\n    $COINIT_SPEED_OVER_MEMORY",
        ];

    "_WinAPI_ColorAdjustLuma" => "Changes the luminance of a RGB value",
        "_WinAPI_ColorAdjustLuma ( $iRGB, $iPercent [, $bScale = True] )",
        [
            "$iRGB": "The initial RGB value",
            "$iPercent": "The luminance change to be effected, in percent",
            "$bScale": "**[optional]** Specifies how to interpret $iPercent, relative to the current luminance or absolute",
        ];

    "_WinAPI_ColorHLSToRGB" => "Converts colors from hue-luminance-saturation (HLS) to RGB format",
        "_WinAPI_ColorHLSToRGB ( $iHue, $iLuminance, $iSaturation )",
        [
            "$iHue": "The original HLS hue value, 0 to 240",
            "$iLuminance": "The original HLS luminance value, 0 to 240",
            "$iSaturation": "The original HLS saturation value, 0 to 240",
        ];

    "_WinAPI_ColorRGBToHLS" => "Converts colors from RGB to hue-luminance-saturation (HLS) format",
        "_WinAPI_ColorRGBToHLS ( $iRGB, ByRef $iHue, ByRef $iLuminance, ByRef $iSaturation )",
        [
            "$iRGB": "The original RGB color",
            "$iHue": "Variable that receives the HLS hue value",
            "$iLuminance": "Variable that receives the HLS luminance value",
            "$iSaturation": "Variable that receives the HLS saturation value",
        ];

    "_WinAPI_CombineRgn" => "Combines two regions and stores the result in a third region",
        "_WinAPI_CombineRgn ( $hRgnDest, $hRgnSrc1, $hRgnSrc2, $iCombineMode )",
        [
            "$hRgnDest": "Handle to a new region with dimensions defined by combining two other regions. (This region must exist before CombineRgn is called.)",
            "$hRgnSrc1": "Handle to the first of two regions to be combined",
            "$hRgnSrc2": "Handle to the second of two regions to be combined",
            "$iCombineMode": "Specifies a mode indicating how the two regions will be combined:\n    $RGN_AND - Creates the intersection of the two combined regions\n    $RGN_COPY - Creates a copy of the region identified by $hRgnSrc1\n    $RGN_DIFF - Combines the parts of $hRgnSrc1 that are not part of $hRgnSrc2\n    $RGN_OR - Creates the union of two combined regions\n    $RGN_XOR - Creates the union of two combined regions except for any overlapping areas",
        ];

    "_WinAPI_CommDlgExtendedError" => "Returns a common dialog box error string",
        "_WinAPI_CommDlgExtendedError ( )",
        [];

    "_WinAPI_CompareMemory" => "Compares two blocks of memory to determine whether the specified number of bytes are identical",
        "_WinAPI_CompareMemory ( $pSource1, $pSource2, $iLength )",
        [
            "$pSource1": "A pointer to the first block of memory to compare",
            "$pSource2": "A pointer to the second block of memory to compare",
            "$iLength": "The number of bytes to be compared",
        ];

    "_WinAPI_CompareString" => "Compares two character strings for a locale specified by identifier",
        "_WinAPI_CompareString ( $iLCID, $sString1, $sString2 [, $iFlags = 0] )",
        [
            "$iLCID": "The locale identifier (LCID)",
            "$sString1": "The first string to compare",
            "$sString2": "The second string to compare",
            "$iFlags": "**[optional]** The flags that indicate how the function compares the two strings, e.g. $NORM_IGNORECASE, $NORM_IGNORENONSPACE or $SORT_STRINGSORT",
        ];

    "_WinAPI_CompressBuffer" => "Compresses a buffer with specified compression format and engine type",
        "_WinAPI_CompressBuffer ( $pUncompressedBuffer, $iUncompressedSize, $pCompressedBuffer, $iCompressedSize [, $iFormatAndEngine = 0x0002] )",
        [
            "$pUncompressedBuffer": "A pointer to a buffer containing the data to be compressed",
            "$iUncompressedSize": "The size of the uncompressed buffer, in bytes",
            "$pCompressedBuffer": "A pointer to a buffer that receives the compressed data",
            "$iCompressedSize": "The size of the compressed buffer, in bytes",
            "$iFormatAndEngine": "**[optional]** The compression format and engine type, e.g. $COMPRESSION_FORMAT_LZNT1 or $COMPRESSION_FORMAT_XPRESS",
        ];

    "_WinAPI_ConfirmCredentials" => "Confirms the validity of credentials returned by _WinAPI_ShellUserAuthenticationDlg()",
        "_WinAPI_ConfirmCredentials ( $sTarget, $bConfirm )",
        [
            "$sTarget": "The name of the target for the credentials",
            "$bConfirm": "Specifies whether the credentials returned from the credential user interface function call are valid",
        ];

    "_WinAPI_CopyBitmap" => "Creates a duplicate of a specified bitmap with a device-independent bitmap (DIB) section",
        "_WinAPI_CopyBitmap ( $hBitmap )",
        [
            "$hBitmap": "Handle to the bitmap to be duplicated",
        ];

    "_WinAPI_CopyCursor" => "Copies the specified cursor",
        "_WinAPI_CopyCursor ( $hCursor )",
        [
            "$hCursor": "Handle to the cursor to be copied",
        ];

    "_WinAPI_CopyEnhMetaFile" => "Copies the contents of an enhanced-format metafile to a specified file",
        "_WinAPI_CopyEnhMetaFile ( $hEmf [, $sFilePath = ''] )",
        [
            "$hEmf": "Handle to the enhanced metafile to be copied",
            "$sFilePath": "**[optional]** The name of the destination file. If empty, the metafile is copied to memory.",
        ];

    "_WinAPI_CopyFileEx" => "Copies an existing file to a new file, notifying the application of its progress through a callback function",
        "_WinAPI_CopyFileEx ( $sExistingFile, $sNewFile [, $iFlags = 0 [, $pProgressProc = 0 [, $pData = 0]]] )",
        [
            "$sExistingFile": "The name of an existing file",
            "$sNewFile": "The name of the new file",
            "$iFlags": "**[optional]** The flags that specify how the file is to be copied, e.g. $COPY_FILE_FAIL_IF_EXISTS, $COPY_FILE_RESTARTABLE or $COPY_FILE_NO_BUFFERING",
            "$pProgressProc": "**[optional]** The address of a callback function that is called each time another portion of the file has been copied",
            "$pData": "**[optional]** The argument to be passed to the callback function",
        ];

    "_WinAPI_CopyIcon" => "Copies the specified icon from another module",
        "_WinAPI_CopyIcon ( $hIcon )",
        [
            "$hIcon": "Handle to the icon to be copied",
        ];

    "_WinAPI_CopyImage" => "Creates a new image (icon, cursor, or bitmap) and copies the attributes of the specified image to the new one",
        "_WinAPI_CopyImage ( $hImage [, $iType = 0 [, $iXDesiredPixels = 0 [, $iYDesiredPixels = 0 [, $iFlags = 0]]]] )",
        [
            "$hImage": "Handle to the image to be copied",
            "$iType": "**[optional]** The type of image to be copied, $IMAGE_BITMAP, $IMAGE_CURSOR or $IMAGE_ICON",
            "$iXDesiredPixels": "**[optional]** The desired width, in pixels, of the image",
            "$iYDesiredPixels": "**[optional]** The desired height, in pixels, of the image",
            "$iFlags": "**[optional]** The copy flags, e.g. $LR_COPYDELETEORG, $LR_COPYRETURNORG or $LR_CREATEDIBSECTION",
        ];

    "_WinAPI_CopyRect" => "Copies the coordinates of one rectangle to another",
        "_WinAPI_CopyRect ( $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the coordinates to be copied",
        ];

    "_WinAPI_CopyStruct" => "Creates a duplicate of a specified structure",
        "_WinAPI_CopyStruct ( $tStruct [, $sStruct = ''] )",
        [
            "$tStruct": "The structure to be duplicated",
            "$sStruct": "**[optional]** The string representing the new structure. If an empty string, the source structure tag is used.",
        ];

    "_WinAPI_CoTaskMemAlloc" => "Allocates a block of task memory",
        "_WinAPI_CoTaskMemAlloc ( $iSize )",
        [
            "$iSize": "The size of the memory block to be allocated, in bytes",
        ];

    "_WinAPI_CoTaskMemFree" => "Frees a block of task memory",
        "_WinAPI_CoTaskMemFree ( $pMemory )",
        [
            "$pMemory": "A pointer to the memory block to be freed",
        ];

    "_WinAPI_CoTaskMemRealloc" => "Changes the size of a previously allocated block of task memory",
        "_WinAPI_CoTaskMemRealloc ( $pMemory, $iSize )",
        [
            "$pMemory": "A pointer to the memory block to be reallocated",
            "$iSize": "The size of the memory block to be reallocated, in bytes",
        ];

    "_WinAPI_CoUninitialize" => "Closes the COM library on the current thread",
        "_WinAPI_CoUninitialize ( )",
        [];

    "_WinAPI_Create32BitHBITMAP" => "Creates a 32 bits-per-pixel bitmap from the specified icon",
        "_WinAPI_Create32BitHBITMAP ( $hIcon [, $bDib = False [, $bDelete = False]] )",
        [
            "$hIcon": "Handle to the source icon",
            "$bDib": "**[optional]** Specifies whether to create a device-independent bitmap (DIB) section",
            "$bDelete": "**[optional]** Specifies whether to delete the icon after the function is successful",
        ];

    "_WinAPI_Create32BitHICON" => "Converts an icon to a 32 bits-per-pixel format and copies to the new icon",
        "_WinAPI_Create32BitHICON ( $hIcon [, $bDelete = False] )",
        [
            "$hIcon": "Handle to the source icon",
            "$bDelete": "**[optional]** Specifies whether to delete the icon after the function is successful",
        ];

    "_WinAPI_CreateANDBitmap" => "Creates AND bitmask device-independent bitmap (DIB) from the specified bitmap",
        "_WinAPI_CreateANDBitmap ( $hBitmap )",
        [
            "$hBitmap": "Handle to the source bitmap",
        ];

    "_WinAPI_CreateBitmap" => "Creates a bitmap with the specified width, height, and color format",
        "_WinAPI_CreateBitmap ( $iWidth, $iHeight [, $iPlanes = 1 [, $iBitsPerPel = 1 [, $pBits = 0]]] )",
        [
            "$iWidth": "Specifies the bitmap width, in pixels",
            "$iHeight": "Specifies the bitmap height, in pixels",
            "$iPlanes": "**[optional]** Specifies the number of color planes used by the device",
            "$iBitsPerPel": "**[optional]** Specifies the number of bits required to identify the color of a single pixel",
            "$pBits": "**[optional]** Pointer to an array of color data used to set the colors in a rectangle of pixels",
        ];

    "_WinAPI_CreateBitmapIndirect" => "Creates a bitmap with the specified width, height, and color format",
        "_WinAPI_CreateBitmapIndirect ( $tBITMAP )",
        [
            "$tBITMAP": "$tagBITMAP structure that contains information about the bitmap",
        ];

    "_WinAPI_CreateBrushIndirect" => "Creates a logical brush that has the specified style, color, and pattern",
        "_WinAPI_CreateBrushIndirect ( $iStyle, $iRGB [, $iHatch = 0] )",
        [
            "$iStyle": "The brush style, e.g. $BS_HATCHED, $BS_HOLLOW or $BS_SOLID",
            "$iRGB": "The color in which the brush is to be drawn",
            "$iHatch": "**[optional]** The hatch style, e.g. $HS_BDIAGONAL, $HS_CROSS or $HS_HORIZONTAL",
        ];

    "_WinAPI_CreateBuffer" => "Allocates a block of memory from the internal library heap",
        "_WinAPI_CreateBuffer ( $iLength [, $pBuffer = 0 [, $bAbort = True]] )",
        [
            "$iLength": "The number of bytes to be allocated",
            "$pBuffer": "**[optional]** A pointer to the memory block to reallocate. If 0, a new block is allocated.",
            "$bAbort": "**[optional]** Specifies whether to exit the script if a memory allocation error occurs",
        ];

    "_WinAPI_CreateBufferFromStruct" => "Allocates a block of memory from the internal library heap and initializes it with the specified structure",
        "_WinAPI_CreateBufferFromStruct ( $tStruct [, $pBuffer = 0 [, $iStart = 0 [, $iLength = -1]]] )",
        [
            "$tStruct": "The structure to copy",
            "$pBuffer": "**[optional]** A pointer to the memory block to reallocate. If 0, a new block is allocated.",
            "$iStart": "**[optional]** The starting byte in the structure to copy",
            "$iLength": "**[optional]** The number of bytes to copy. If -1, the entire structure is copied.",
        ];

    "_WinAPI_CreateCaret" => "Creates a new shape for the system caret and assigns ownership of the caret to the specified window",
        "_WinAPI_CreateCaret ( $hWnd, $hBitmap [, $iWidth = 0 [, $iHeight = 0]] )",
        [
            "$hWnd": "Handle to the window that owns the caret",
            "$hBitmap": "Handle to the bitmap that defines the caret shape. If 0, the caret is solid; if 1, the caret is gray.",
            "$iWidth": "**[optional]** The width of the caret, in logical units",
            "$iHeight": "**[optional]** The height of the caret, in logical units",
        ];

    "_WinAPI_CreateColorAdjustment" => "Creates $tagCOLORADJUSTMENT structure specifies the color adjustment",
        "_WinAPI_CreateColorAdjustment ( [$iFlags = 0 [, $iIlluminant = 0 [, $iGammaR = 10000 [, $iGammaG = 10000 [, $iGammaB = 10000 [, $iBlack = 0 [, $iWhite = 10000 [, $iContrast = 0 [, $iBrightness = 0 [, $iColorfulness = 0 [, $iTint = 0]]]]]]]]]]] )",
        [
            "$iFlags": "**[optional]** The color adjustment flags, $CA_NEGATIVE or $CA_LOG_FILTER",
            "$iIlluminant": "**[optional]** The type of standard light source under which the image is viewed",
            "$iGammaR": "**[optional]** The n power gamma-correction value for the red primary of the source colors",
            "$iGammaG": "**[optional]** The n power gamma-correction value for the green primary of the source colors",
            "$iGammaB": "**[optional]** The n power gamma-correction value for the blue primary of the source colors",
            "$iBlack": "**[optional]** The black reference for the source colors",
            "$iWhite": "**[optional]** The white reference for the source colors",
            "$iContrast": "**[optional]** The amount of contrast to be applied to the source object, -100 to 100",
            "$iBrightness": "**[optional]** The amount of brightness to be applied to the source object, -100 to 100",
            "$iColorfulness": "**[optional]** The amount of colorfulness to be applied to the source object, -100 to 100",
            "$iTint": "**[optional]** The amount of red or green tint adjustment to be applied to the source object, -100 to 100",
        ];

    "_WinAPI_CreateCompatibleBitmap" => "Creates a bitmap compatible with the specified device context",
        "_WinAPI_CreateCompatibleBitmap ( $hDC, $iWidth, $iHeight )",
        [
            "$hDC": "Identifies a device context",
            "$iWidth": "Specifies the bitmap width, in pixels",
            "$iHeight": "Specifies the bitmap height, in pixels",
        ];

    "_WinAPI_CreateCompatibleBitmapEx" => "Creates a bitmap compatible with the specified device and fills it with the specified color",
        "_WinAPI_CreateCompatibleBitmapEx ( $hDC, $iWidth, $iHeight, $iRGB )",
        [
            "$hDC": "Handle to a device context",
            "$iWidth": "The bitmap width, in pixels",
            "$iHeight": "The bitmap height, in pixels",
            "$iRGB": "The color to fill the bitmap with",
        ];

    "_WinAPI_CreateCompatibleDC" => "Creates a memory device context compatible with the specified device",
        "_WinAPI_CreateCompatibleDC ( $hDC )",
        [
            "$hDC": "Handle to an existing DC. If this handle is 0, the function creates a memory DC compatible with the application's current screen.",
        ];

    "_WinAPI_CreateDesktop" => "Creates a new desktop and associates it with the current window station of the calling process",
        "_WinAPI_CreateDesktop ( $sName [, $iAccess = 0x0002 [, $iFlags = 0 [, $iHeap = 0 [, $tSecurity = 0]]]] )",
        [
            "$sName": "The name of the desktop to be created",
            "$iAccess": "**[optional]** The access to the desktop, e.g. $DESKTOP_CREATEWINDOW, $DESKTOP_READOBJECTS or $DESKTOP_SWITCHDESKTOP",
            "$iFlags": "**[optional]** The flag that allows processes running in other accounts on the desktop to set hooks, $DF_ALLOWOTHERACCOUNTHOOK",
            "$iHeap": "**[optional]** The size of the desktop heap, in kilobytes",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that determines whether the returned handle can be inherited by child processes",
        ];

    "_WinAPI_CreateDIB" => "Creates an uncompressed device-independent bitmap (DIB)",
        "_WinAPI_CreateDIB ( $iWidth, $iHeight [, $iBitsPerPel = 32 [, $tColorTable = 0 [, $iColorCount = 0]]] )",
        [
            "$iWidth": "The width of the bitmap, in pixels",
            "$iHeight": "The height of the bitmap, in pixels",
            "$iBitsPerPel": "**[optional]** The number of bits that define each pixel and the maximum number of colors in the bitmap",
            "$tColorTable": "**[optional]** The structure that contains the color table",
            "$iColorCount": "**[optional]** The number of entries in the color table",
        ];

    "_WinAPI_CreateDIBColorTable" => "Creates RGBQUAD structure array from the array of RGB colors",
        "_WinAPI_CreateDIBColorTable ( Const ByRef $aColorTable [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$aColorTable": "The array of colors",
            "$iStart": "**[optional]** The index of array to start creating at",
            "$iEnd": "**[optional]** The index of array to stop creating at",
        ];

    "_WinAPI_CreateDIBitmap" => "Creates a compatible bitmap (DDB) from a DIB and, optionally, sets the bitmap bits",
        "_WinAPI_CreateDIBitmap ( $hDC, $tBITMAPINFO, $iUsage, $pBits )",
        [
            "$hDC": "Handle to a device context",
            "$tBITMAPINFO": "$tagBITMAPINFO structure that specifies the dimensions and color format of the DIB",
            "$iUsage": "Specifies whether the color table contains literal RGB values, $DIB_PAL_COLORS or $DIB_RGB_COLORS",
            "$pBits": "Pointer to the array of bytes containing the initial bitmap data",
        ];

    "_WinAPI_CreateDIBSection" => "Creates a DIB that applications can write to directly",
        "_WinAPI_CreateDIBSection ( $hDC, $tBITMAPINFO, $iUsage, ByRef $pBits [, $hSection = 0 [, $iOffset = 0]] )",
        [
            "$hDC": "Handle to a device context",
            "$tBITMAPINFO": "$tagBITMAPINFO structure that specifies various attributes of the DIB",
            "$iUsage": "The type of data contained in the color table, $DIB_PAL_COLORS or $DIB_RGB_COLORS",
            "$pBits": "Variable that receives a pointer to the location of the DIB bit values",
            "$hSection": "**[optional]** Handle to a file-mapping object that the function will use to create the DIB",
            "$iOffset": "**[optional]** The offset from the beginning of the file-mapping object to where storage for the bitmap bit values is to begin",
        ];

    "_WinAPI_CreateDirectory" => "Creates a new directory",
        "_WinAPI_CreateDirectory ( $sDir [, $tSecurity = 0] )",
        [
            "$sDir": "The path of the directory to be created",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new directory",
        ];

    "_WinAPI_CreateDirectoryEx" => "Creates a new directory with the attributes of a specified template directory",
        "_WinAPI_CreateDirectoryEx ( $sNewDir, $sTemplateDir [, $tSecurity = 0] )",
        [
            "$sNewDir": "The path of the directory to be created",
            "$sTemplateDir": "The path of the directory to use as a template when creating the new directory",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new directory",
        ];

    "_WinAPI_CreateEllipticRgn" => "Creates an elliptical region",
        "_WinAPI_CreateEllipticRgn ( $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the coordinates of the bounding rectangle of the ellipse",
        ];

    "_WinAPI_CreateEmptyIcon" => "Creates a fully transparent icon",
        "_WinAPI_CreateEmptyIcon ( $iWidth, $iHeight [, $iBitsPerPel = 32] )",
        [
            "$iWidth": "The width of the icon, in pixels",
            "$iHeight": "The height of the icon, in pixels",
            "$iBitsPerPel": "**[optional]** The number of bits that define each pixel",
        ];

    "_WinAPI_CreateEnhMetaFile" => "Creates a device context for an enhanced-format metafile",
        "_WinAPI_CreateEnhMetaFile ( [$hDC = 0 [, $tRECT = 0 [, $bPixels = False [, $sFilePath = '' [, $sDescription = '']]]]] )",
        [
            "$hDC": "**[optional]** Handle to a reference device for the enhanced metafile",
            "$tRECT": "**[optional]** $tagRECT structure that specifies the dimensions of the picture to be stored in the enhanced metafile",
            "$bPixels": "**[optional]** Specifies whether the dimensions are in pixels or in 0.01 mm units",
            "$sFilePath": "**[optional]** The file name for the enhanced metafile to be created. If empty, a memory-based metafile is created.",
            "$sDescription": "**[optional]** The string that specifies the name of the application that created the picture, and the picture's title",
        ];

    "_WinAPI_CreateEvent" => "Creates or opens a named or unnamed event object",
        "_WinAPI_CreateEvent ( [$tAttributes = 0 [, $bManualReset = True [, $bInitialState = True [, $sName = \"\"]]]] )",
        [
            "$tAttributes": "**[optional]** a $tagSECURITY_ATTRIBUTES structure or a pointer to it. If 0, the handle cannot be inherited by child processes.",
            "$bManualReset": "**[optional]** If True, the function creates a manual-reset event object which requires use of the _WinAPI_ResetEvent() function to set the state to nonsignaled. If False, the function creates an auto-reset event object and system automatically resets the state to nonsignaled after a single waiting thread has been released.",
            "$bInitialState": "**[optional]** If True, the initial state of the event object is signaled; otherwise, it is nonsignaled.",
            "$sName": "**[optional]** The name of the event object. Name comparison is case sensitive. If blank, the event object is created without a name.",
        ];

    "_WinAPI_CreateFile" => "Creates or opens a file or other device",
        "_WinAPI_CreateFile ( $sFileName, $iCreation [, $iAccess = 4 [, $iShare = 0 [, $iAttributes = 0 [, $tSecurity = 0]]]] )",
        [
            "$sFileName": "Name of an object to create or open",
            "$iCreation": "Action to take on files that exist and do not exist:\n    0 - Creates a new file. The function fails if the file exists\n    1 - Creates a new file. If a file exists, it is overwritten\n    2 - Opens a file. The function fails if the file does not exist\n    3 - Opens a file. If the file does not exist, the function creates the file\n    4 - Opens a file and truncates it so that its size is 0 bytes. The function fails if the file does not exist.",
            "$iAccess": "**[optional]** Access to the object:\n    1 - Execute\n    2 - Read\n    4 - Write",
            "$iShare": "**[optional]** Sharing mode of an object:\n    1 - Delete\n    2 - Read\n    4 - Write",
            "$iAttributes": "**[optional]** The file attributes:\n    1 - File should be archived\n    2 - File is hidden\n    4 - File is read only\n    8 - File is part of or used exclusively by an operating system.",
            "$tSecurity": "**[optional]** a $tagSECURITY_ATTRIBUTES structure or a pointer to it that determines if the returned handle can be inherited by child processes. If $tSecurity is 0, the handle cannot be inherited.",
        ];

    "_WinAPI_CreateFileEx" => "Creates or opens a file or I/O device",
        "_WinAPI_CreateFileEx ( $sFilePath, $iCreation, $iAccess [, $iShare = 0 [, $iFlagsAndAttributes = 0 [, $tSecurity = 0 [, $hTemplate = 0]]]] )",
        [
            "$sFilePath": "The name of the file or device to be created or opened",
            "$iCreation": "An action to take on a file or device that exists or does not exist, e.g. $CREATE_NEW, $CREATE_ALWAYS, $OPEN_EXISTING, $OPEN_ALWAYS or $TRUNCATE_EXISTING",
            "$iAccess": "The requested access to the file or device, e.g. $GENERIC_READ or $GENERIC_WRITE",
            "$iShare": "**[optional]** The requested sharing mode, e.g. $FILE_SHARE_READ, $FILE_SHARE_WRITE or $FILE_SHARE_DELETE",
            "$iFlagsAndAttributes": "**[optional]** The file or device attributes and flags",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that contains the security descriptor",
            "$hTemplate": "**[optional]** Handle to a template file with the $GENERIC_READ access right",
        ];

    "_WinAPI_CreateFileMapping" => "Creates or opens a named or unnamed file mapping object for a specified file",
        "_WinAPI_CreateFileMapping ( $hFile [, $iSize = 0 [, $sName = '' [, $iProtect = 0x0004 [, $tSecurity = '']]]] )",
        [
            "$hFile": "Handle to the file from which to create a file mapping object, or -1 for the paging file",
            "$iSize": "**[optional]** The maximum size of the file mapping object, in bytes",
            "$sName": "**[optional]** The name of the file mapping object",
            "$iProtect": "**[optional]** The protection for the file view, e.g. $PAGE_READONLY, $PAGE_READWRITE or $PAGE_EXECUTE_READWRITE",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that determines whether a returned handle can be inherited by child processes",
        ];

    "_WinAPI_CreateFont" => "Creates a logical font with the specified characteristics",
        "_WinAPI_CreateFont ( $iHeight, $iWidth [, $iEscape = 0 [, $iOrientn = 0 [, $iWeight = $FW_NORMAL [, $bItalic = False [, $bUnderline = False [, $bStrikeout = False [, $iCharset = $DEFAULT_CHARSET [, $iOutputPrec = $OUT_DEFAULT_PRECIS [, $iClipPrec = $CLIP_DEFAULT_PRECIS [, $iQuality = $DEFAULT_QUALITY [, $iPitch = 0 [, $sFace = 'Arial']]]]]]]]]]]] )",
        [
            "$iHeight": "height of font",
            "$iWidth": "average character width",
            "$iEscape": "**[optional]** angle of escapement",
            "$iOrientn": "**[optional]** base-line orientation angle",
            "$iWeight": "**[optional]** font weight, The following values are defined for convenience:\n    $FW_DONTCARE - 0\n    $FW_THIN - 100\n    $FW_EXTRALIGHT - 200\n    $FW_LIGHT - 300\n    $FW_NORMAL - 400\n    $FW_MEDIUM - 500\n    $FW_SEMIBOLD - 600\n    $FW_BOLD - 700\n    $FW_EXTRABOLD - 800\n    $FW_HEAVY - 900",
            "$bItalic": "**[optional]** italic attribute option",
            "$bUnderline": "**[optional]** underline attribute option",
            "$bStrikeout": "**[optional]** strikeout attribute option",
            "$iCharset": "**[optional]** character set identifier, e.g. $ANSI_CHARSET, $DEFAULT_CHARSET, $OEM_CHARSET or $SYMBOL_CHARSET",
            "$iOutputPrec": "**[optional]** output precision, e.g. $OUT_DEFAULT_PRECIS, $OUT_OUTLINE_PRECIS or $OUT_TT_ONLY_PRECIS",
            "$iClipPrec": "**[optional]** clipping precision, e.g. $CLIP_DEFAULT_PRECIS or $CLIP_CHARACTER_PRECIS",
            "$iQuality": "**[optional]** output quality, e.g. $DEFAULT_QUALITY, $DRAFT_QUALITY, $PROOF_QUALITY, $NONANTIALIASED_QUALITY, $ANTIALIASED_QUALITY or $CLEARTYPE_QUALITY",
            "$iPitch": "**[optional]** pitch and family",
            "$sFace": "**[optional]** typeface name",
        ];

    "_WinAPI_CreateFontEx" => "Creates a logical font that has specific characteristics",
        "_WinAPI_CreateFontEx ( $iHeight [, $iWidth = 0 [, $iEscapement = 0 [, $iOrientation = 0 [, $iWeight = $FW_NORMAL [, $iStyle = 0 [, $iCharSet = $DEFAULT_CHARSET [, $iOutPrecision = $OUT_DEFAULT_PRECIS [, $iClipPrecision = $CLIP_DEFAULT_PRECIS [, $iQuality = $DEFAULT_QUALITY [, $iPitchAndFamily = 0 [, $sFaceName = '' [, $iFlags = 0]]]]]]]]]]]] )",
        [
            "$iHeight": "The height, in logical units, of the font's character cell or character",
            "$iWidth": "**[optional]** The average width, in logical units, of characters in the font",
            "$iEscapement": "**[optional]** The angle, in tenths of degrees, between the escapement vector and the x-axis of the device",
            "$iOrientation": "**[optional]** The angle, in tenths of degrees, between each character's base line and the x-axis of the device",
            "$iWeight": "**[optional]** The weight of the font in the range 0 through 1000",
            "$iStyle": "**[optional]** The style of the font, e.g. $FS_BOLD, $FS_ITALIC, $FS_UNDERLINE or $FS_STRIKETHROUGH",
            "$iCharSet": "**[optional]** The character set",
            "$iOutPrecision": "**[optional]** The output precision",
            "$iClipPrecision": "**[optional]** The clipping precision",
            "$iQuality": "**[optional]** The output quality",
            "$iPitchAndFamily": "**[optional]** The pitch and family of the font",
            "$sFaceName": "**[optional]** The typeface name of the font",
            "$iFlags": "**[optional]** The font flags, $FS_EMBEDDED or $FS_SUBSTITUTED",
        ];

    "_WinAPI_CreateFontIndirect" => "Creates a logical font that has specific characteristics",
        "_WinAPI_CreateFontIndirect ( $tLogFont )",
        [
            "$tLogFont": "$tagLOGFONT structure that defines the characteristics of the logical font",
        ];

    "_WinAPI_CreateGUID" => "Creates a globally unique identifier (GUID)",
        "_WinAPI_CreateGUID ( )",
        [];

    "_WinAPI_CreateHardLink" => "Establishes a hard link between an existing file and a new file",
        "_WinAPI_CreateHardLink ( $sNewFile, $sExistingFile )",
        [
            "$sNewFile": "The name of the new file",
            "$sExistingFile": "The name of the existing file",
        ];

    "_WinAPI_CreateHatchBrush" => "Creates a logical brush that has the specified hatch pattern and color",
        "_WinAPI_CreateHatchBrush ( $iStyle, $iRGB )",
        [
            "$iStyle": "The hatch style of the brush, e.g. $HS_BDIAGONAL, $HS_CROSS or $HS_DIAGCROSS",
            "$iRGB": "The foreground color of the brush that is used for the hatches",
        ];

    "_WinAPI_CreateIcon" => "Creates an icon that has the specified size, colors, and bit patterns",
        "_WinAPI_CreateIcon ( $hInstance, $iWidth, $iHeight, $iPlanes, $iBitsPixel, $pANDBits, $pXORBits )",
        [
            "$hInstance": "Handle to the instance of the module creating the icon",
            "$iWidth": "The width, in pixels, of the icon",
            "$iHeight": "The height, in pixels, of the icon",
            "$iPlanes": "The number of planes in the XOR bitmask of the icon",
            "$iBitsPixel": "The number of bits-per-pixel in the XOR bitmask of the icon",
            "$pANDBits": "Pointer to an array of bytes that contains the bit values for the AND bitmask of the icon",
            "$pXORBits": "Pointer to an array of bytes that contains the bit values for the XOR bitmask of the icon",
        ];

    "_WinAPI_CreateIconFromResourceEx" => "Creates an icon or cursor from resource bits describing the icon",
        "_WinAPI_CreateIconFromResourceEx ( $pData, $iSize [, $bIcon = True [, $iXDesiredPixels = 0 [, $iYDesiredPixels = 0 [, $iFlags = 0]]]] )",
        [
            "$pData": "Pointer to the icon or cursor resource bits",
            "$iSize": "The size, in bytes, of the set of bits pointed to by the $pData parameter",
            "$bIcon": "**[optional]** Specifies whether an icon or a cursor is to be created",
            "$iXDesiredPixels": "**[optional]** The desired width, in pixels, of the icon or cursor",
            "$iYDesiredPixels": "**[optional]** The desired height, in pixels, of the icon or cursor",
            "$iFlags": "**[optional]** The load flags, e.g. $LR_DEFAULTCOLOR, $LR_DEFAULTSIZE or $LR_MONOCHROME",
        ];

    "_WinAPI_CreateIconIndirect" => "Creates an icon or cursor from an ICONINFO structure",
        "_WinAPI_CreateIconIndirect ( $hBitmap, $hMask [, $iXHotspot = 0 [, $iYHotspot = 0 [, $bIcon = True]]] )",
        [
            "$hBitmap": "Handle to the icon color bitmap",
            "$hMask": "Handle to the icon bitmask bitmap",
            "$iXHotspot": "**[optional]** The x-coordinate of a cursor's hot spot",
            "$iYHotspot": "**[optional]** The y-coordinate of a cursor's hot spot",
            "$bIcon": "**[optional]** Specifies whether an icon or a cursor is to be created",
        ];

    "_WinAPI_CreateJobObject" => "Creates or opens a job object",
        "_WinAPI_CreateJobObject ( [$sName = '' [, $tSecurity = 0]] )",
        [
            "$sName": "**[optional]** The name of the job. If an empty string, the job object is created without a name.",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies the security descriptor for the job object",
        ];

    "_WinAPI_CreateMRUList" => "Creates a new most recently used (MRU) list or opens an existing list",
        "_WinAPI_CreateMRUList ( $hKey, $sSubKey [, $iMax = 26] )",
        [
            "$hKey": "Handle to the registry key in which the MRU list will be stored, or one of the predefined keys such as $HKEY_CURRENT_USER",
            "$sSubKey": "The registry subkey under which the MRU list will be stored",
            "$iMax": "**[optional]** The maximum number of entries in the MRU list",
        ];

    "_WinAPI_CreateMutex" => "Creates or opens a named or unnamed mutex object",
        "_WinAPI_CreateMutex ( $sMutex [, $bInitial = True [, $tSecurity = 0]] )",
        [
            "$sMutex": "The name of the mutex object",
            "$bInitial": "**[optional]** Specifies whether the calling thread obtains initial ownership of the mutex object",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new mutex",
        ];

    "_WinAPI_CreateNumberFormatInfo" => "Creates a $tagNUMBERFMT structure with the specified number formatting information",
        "_WinAPI_CreateNumberFormatInfo ( $iNumDigits, $iLeadingZero, $iGrouping, $sDecimalSep, $sThousandSep, $iNegativeOrder )",
        [
            "$iNumDigits": "The number of fractional digits",
            "$iLeadingZero": "Specifies whether to use leading zeros in decimal fields",
            "$iGrouping": "The number of digits in each group of numbers to the left of the decimal separator",
            "$sDecimalSep": "The decimal separator string",
            "$sThousandSep": "The thousands separator string",
            "$iNegativeOrder": "The negative number mode",
        ];

    "_WinAPI_CreateObjectID" => "Creates or retrieves the object identifier for the specified file or directory",
        "_WinAPI_CreateObjectID ( $sFilePath )",
        [
            "$sFilePath": "The path to the file or directory",
        ];

    "_WinAPI_CreatePatternBrush" => "Creates a logical brush with the specified bitmap pattern",
        "_WinAPI_CreatePatternBrush ( $hBitmap )",
        [
            "$hBitmap": "Handle to the bitmap to be used to create the logical brush",
        ];

    "_WinAPI_CreatePen" => "Creates a logical pen that has the specified style, width, and color",
        "_WinAPI_CreatePen ( $iPenStyle, $iWidth, $iColor )",
        [
            "$iPenStyle": "Specifies the pen style. It can be any one of the following values:\n    PS_SOLID - The pen is solid.\n    PS_DASH - The pen is dashed. This style is valid only when the pen width is one or less in device units.\n    PS_DOT - The pen is dotted. This style is valid only when the pen width is one or less in device units.\n    PS_DASHDOT - The pen has alternating dashes and dots. This style is valid only when the pen width is one or less in device units.\n    PS_DASHDOTDOT - The pen has alternating dashes and double dots. This style is valid only when the pen width is one or less in device units.\n    PS_NULL - The pen is invisible.\n    PS_INSIDEFRAME - The pen is solid.",
            "$iWidth": "Specifies the width of the pen, in logical units.",
            "$iColor": "Specifies the color of the pen (BGR)",
        ];

    "_WinAPI_CreatePolygonRgn" => "Creates a polygonal region",
        "_WinAPI_CreatePolygonRgn ( Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1 [, $iMode = 1]]] )",
        [
            "$aPoint": "The 2D array ([x1, y1], [x2, y2], ... [xN, yN]) that contains the vertices of the polygon",
            "$iStart": "**[optional]** The index of array to start creating at",
            "$iEnd": "**[optional]** The index of array to stop creating at",
            "$iMode": "**[optional]** The fill mode used to determine which pixels are in the region, $ALTERNATE or $WINDING",
        ];

    "_WinAPI_CreateProcess" => "Creates a new process and its primary thread",
        "_WinAPI_CreateProcess ( $sAppName, $sCommand, $tSecurity, $tThread, $bInherit, $iFlags, $pEnviron, $sDir, $tStartupInfo, $tProcess )",
        [
            "$sAppName": "The name of the module to be executed",
            "$sCommand": "The command line to be executed",
            "$tSecurity": "a $tagSECURITY_ATTRIBUTES structure or a pointer to it that determines whether the returned handle to the new process object can be inherited by child processes.",
            "$tThread": "a $tagSECURITY_ATTRIBUTES structure or a pointer to it that determines whether the returned handle to the new thread object can be inherited by child processes.",
            "$bInherit": "If True, each inheritable handle in the calling process is inherited by the new process",
            "$iFlags": "Flags that control the priority class and creation of the process",
            "$pEnviron": "Pointer to the environment block for the new process",
            "$sDir": "The full path to the current directory for the process",
            "$tStartupInfo": "a $tagSTARTUPINFO structure or a pointer to it that specifies how the main window for the new process should appear.",
            "$tProcess": "a $tagPROCESS_INFORMATION structure or a pointer to it that receives identification information about the new process.",
        ];

    "_WinAPI_CreateProcessWithToken" => "Creates a new process and its primary thread in the security context of the specified token",
        "_WinAPI_CreateProcessWithToken ( $sApp, $sCmd, $iFlags, $tStartupInfo, $tProcessInfo, $hToken [, $iLogonFlags = 0 [, $pEnvironment = 0 [, $sDir = '']]] )",
        [
            "$sApp": "The name of the module to be executed",
            "$sCmd": "The command line to be executed",
            "$iFlags": "The flags that control how the process is created, e.g. $CREATE_NEW_CONSOLE or $CREATE_UNICODE_ENVIRONMENT",
            "$tStartupInfo": "$tagSTARTUPINFO structure that specifies the window station, desktop, standard handles, and appearance of the main window for the new process",
            "$tProcessInfo": "$tagPROCESS_INFORMATION structure that receives identification information for the new process",
            "$hToken": "A handle to the primary token that represents a user",
            "$iLogonFlags": "**[optional]** The logon option, $LOGON_WITH_PROFILE or $LOGON_NETCREDENTIALS_ONLY",
            "$pEnvironment": "**[optional]** A pointer to an environment block for the new process",
            "$sDir": "**[optional]** The full path to the current directory for the process",
        ];

    "_WinAPI_CreateRectRgn" => "Creates a rectangular region",
        "_WinAPI_CreateRectRgn ( $iLeftRect, $iTopRect, $iRightRect, $iBottomRect )",
        [
            "$iLeftRect": "X-coordinate of the upper-left corner of the region",
            "$iTopRect": "Y-coordinate of the upper-left corner of the region",
            "$iRightRect": "X-coordinate of the lower-right corner of the region",
            "$iBottomRect": "Y-coordinate of the lower-right corner of the region",
        ];

    "_WinAPI_CreateRectRgnIndirect" => "Creates a rectangular region",
        "_WinAPI_CreateRectRgnIndirect ( $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the coordinates of the upper-left and lower-right corners of the region",
        ];

    "_WinAPI_CreateRoundRectRgn" => "Creates a rectangular region with rounded corners",
        "_WinAPI_CreateRoundRectRgn ( $iLeftRect, $iTopRect, $iRightRect, $iBottomRect, $iWidthEllipse, $iHeightEllipse )",
        [
            "$iLeftRect": "X-coordinate of the upper-left corner of the region",
            "$iTopRect": "Y-coordinate of the upper-left corner of the region",
            "$iRightRect": "X-coordinate of the lower-right corner of the region",
            "$iBottomRect": "Y-coordinate of the lower-right corner of the region",
            "$iWidthEllipse": "Width of the ellipse used to create the rounded corners",
            "$iHeightEllipse": "Height of the ellipse used to create the rounded corners",
        ];

    "_WinAPI_CreateSemaphore" => "Creates or opens a named or unnamed semaphore object",
        "_WinAPI_CreateSemaphore ( $sSemaphore, $iInitial, $iMaximum [, $tSecurity = 0] )",
        [
            "$sSemaphore": "The name of the semaphore object",
            "$iInitial": "The initial count for the semaphore object",
            "$iMaximum": "The maximum count for the semaphore object",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new semaphore",
        ];

    "_WinAPI_CreateSolidBrush" => "Creates a logical brush that has the specified solid color",
        "_WinAPI_CreateSolidBrush ( $iColor )",
        [
            "$iColor": "Specifies the color of the brush (BGR)",
        ];

    "_WinAPI_CreateStreamOnHGlobal" => "Creates a stream object that uses an HGLOBAL memory handle to store the stream contents",
        "_WinAPI_CreateStreamOnHGlobal ( [$hGlobal = 0 [, $bDeleteOnRelease = True]] )",
        [
            "$hGlobal": "**[optional]** A memory handle allocated by the _MemGlobalAlloc() function. If 0, a new block is allocated.",
            "$bDeleteOnRelease": "**[optional]** Specifies whether the underlying handle for this stream object should be automatically freed when the stream object is released",
        ];

    "_WinAPI_CreateString" => "Copies a specified string to the newly allocated memory block and returns its pointer",
        "_WinAPI_CreateString ( $sString [, $pString = 0 [, $iLength = -1 [, $bUnicode = True [, $bAbort = True]]]] )",
        [
            "$sString": "The string to copy",
            "$pString": "**[optional]** Pointer to the memory block to reuse. If 0, a new block is allocated.",
            "$iLength": "**[optional]** The length of the string, in characters. If -1, the entire string is copied.",
            "$bUnicode": "**[optional]** Specifies whether the string is Unicode",
            "$bAbort": "**[optional]** Specifies whether to exit the script if a memory allocation error occurs",
        ];

    "_WinAPI_CreateSymbolicLink" => "Creates a symbolic link",
        "_WinAPI_CreateSymbolicLink ( $sSymlink, $sTarget [, $bDirectory = False] )",
        [
            "$sSymlink": "The symbolic link to be created",
            "$sTarget": "The name of the target for the symbolic link to be created",
            "$bDirectory": "**[optional]** Specifies whether the link target is a directory",
        ];

    "_WinAPI_CreateThread" => "Creates a thread to execute within the virtual address space of the calling process",
        "_WinAPI_CreateThread ( $pStartAddress [, $pParameter = 0 [, $iFlags = 0 [, $iStackSize = 0]]] )",
        [
            "$pStartAddress": "A pointer to the application-defined function to be executed by the thread",
            "$pParameter": "**[optional]** A pointer to a variable to be passed to the thread",
            "$iFlags": "**[optional]** The flags that control the creation of the thread, e.g. $CREATE_SUSPENDED",
            "$iStackSize": "**[optional]** The initial size of the stack, in bytes",
        ];

    "_WinAPI_CreateTransform" => "Creates $tagXFORM structure specifies a world-space to page-space transformation",
        "_WinAPI_CreateTransform ( [$nM11 = 1 [, $nM12 = 0 [, $nM21 = 0 [, $nM22 = 1 [, $nDX = 0 [, $nDY = 0]]]]]] )",
        [
            "$nM11": "**[optional]** The horizontal scaling component, the cosine of the rotation angle, or the horizontal component of the reflection",
            "$nM12": "**[optional]** The sine of the rotation angle, or the horizontal proportionality constant",
            "$nM21": "**[optional]** The negative sine of the rotation angle, or the vertical proportionality constant",
            "$nM22": "**[optional]** The vertical scaling component, the cosine of the rotation angle, or the vertical component of the reflection",
            "$nDX": "**[optional]** The horizontal translation component, in logical units",
            "$nDY": "**[optional]** The vertical translation component, in logical units",
        ];

    "_WinAPI_CreateWaitableTimer" => "Creates or opens a waitable timer object",
        "_WinAPI_CreateWaitableTimer ( [$sTimer = '' [, $bManualReset = False [, $tSecurity = 0]]] )",
        [
            "$sTimer": "**[optional]** The name of the timer object",
            "$bManualReset": "**[optional]** Specifies whether the timer is a manual-reset notification timer",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new timer object",
        ];

    "_WinAPI_CreateWindowEx" => "Creates an overlapped, pop-up, or child window",
        "_WinAPI_CreateWindowEx ( $iExStyle, $sClass, $sName, $iStyle, $iX, $iY, $iWidth, $iHeight, $hParent [, $hMenu = 0 [, $hInstance = 0 [, $pParam = 0]]] )",
        [
            "$iExStyle": "Extended window style",
            "$sClass": "Registered class name",
            "$sName": "Window name",
            "$iStyle": "Window style",
            "$iX": "Horizontal position of window",
            "$iY": "Vertical position of window",
            "$iWidth": "Window width",
            "$iHeight": "Window height",
            "$hParent": "Handle to parent or owner window",
            "$hMenu": "**[optional]** Handle to menu or child-window identifier",
            "$hInstance": "**[optional]** Handle to application instance",
            "$pParam": "**[optional]** Pointer to window-creation data",
        ];

    "_WinAPI_CreateWindowStation" => "Creates a window station object and associates it with the calling process",
        "_WinAPI_CreateWindowStation ( [$sName = '' [, $iAccess = 0 [, $iFlags = 0 [, $tSecurity = 0]]]] )",
        [
            "$sName": "**[optional]** The name of the window station to be created",
            "$iAccess": "**[optional]** The type of access the returned handle has to the window station",
            "$iFlags": "**[optional]** If this parameter is $CWF_CREATE_ONLY and the window station already exists, the call fails",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that determines whether the returned handle can be inherited by child processes",
        ];

    "_WinAPI_DecompressBuffer" => "Decompresses an entire compressed buffer",
        "_WinAPI_DecompressBuffer ( $pUncompressedBuffer, $iUncompressedSize, $pCompressedBuffer, $iCompressedSize [, $iFormat = 0x0002] )",
        [
            "$pUncompressedBuffer": "A pointer to a buffer that receives the decompressed data",
            "$iUncompressedSize": "The size of the uncompressed buffer, in bytes",
            "$pCompressedBuffer": "A pointer to a buffer that contains the data to decompress",
            "$iCompressedSize": "The size of the compressed buffer, in bytes",
            "$iFormat": "**[optional]** The compression format of the compressed buffer",
        ];

    "_WinAPI_DecryptFile" => "Decrypts an encrypted file or directory",
        "_WinAPI_DecryptFile ( $sFilePath )",
        [
            "$sFilePath": "The name of the file or directory to be decrypted",
        ];

    "_WinAPI_DeferWindowPos" => "Updates the specified multiple-window-position structure for the specified window",
        "_WinAPI_DeferWindowPos ( $hInfo, $hWnd, $hAfter, $iX, $iY, $iWidth, $iHeight, $iFlags )",
        [
            "$hInfo": "Handle to a multiple-window-position structure returned by _WinAPI_BeginDeferWindowPos()",
            "$hWnd": "Handle to the window for which update information is stored in the structure",
            "$hAfter": "Handle to the window that precedes the positioned window in the Z order",
            "$iX": "The x-coordinate of the window's upper-left corner",
            "$iY": "The y-coordinate of the window's upper-left corner",
            "$iWidth": "The window's new width, in pixels",
            "$iHeight": "The window's new height, in pixels",
            "$iFlags": "The flags that affect the size and position of the window, e.g. $SWP_NOMOVE, $SWP_NOSIZE or $SWP_NOZORDER",
        ];

    "_WinAPI_DefineDosDevice" => "Defines, redefines, or deletes MS-DOS device names",
        "_WinAPI_DefineDosDevice ( $sDevice, $iFlags [, $sFilePath = ''] )",
        [
            "$sDevice": "The MS-DOS device name string specifying the device the function is defining, redefining, or deleting",
            "$iFlags": "The controllable aspects of the function, e.g. $DDD_RAW_TARGET_PATH, $DDD_REMOVE_DEFINITION or $DDD_NO_BROADCAST_SYSTEM",
            "$sFilePath": "**[optional]** The path string that will implement this device",
        ];

    "_WinAPI_DefRawInputProc" => "Calls the default raw input procedure to provide default processing for any raw input messages that an application does not process",
        "_WinAPI_DefRawInputProc ( $paRawInput, $iInput )",
        [
            "$paRawInput": "A pointer to an array of $tagRAWINPUT structures",
            "$iInput": "The number of $tagRAWINPUT structures pointed to by $paRawInput",
        ];

    "_WinAPI_DefWindowProc" => "Call the default window procedure to provide default processing",
        "_WinAPI_DefWindowProc ( $hWnd, $iMsg, $wParam, $lParam )",
        [
            "$hWnd": "Handle to the window procedure that received the message",
            "$iMsg": "Specifies the message",
            "$wParam": "Specifies additional message information. The content of this parameter depends on the value of the $iMsg parameter.",
            "$lParam": "Specifies additional message information. The content of this parameter depends on the value of the $iMsg parameter.",
        ];

    "_WinAPI_DeleteDC" => "Deletes the specified device context",
        "_WinAPI_DeleteDC ( $hDC )",
        [
            "$hDC": "Identifies the device context to be deleted",
        ];

    "_WinAPI_DeleteEnhMetaFile" => "Deletes an enhanced-format metafile or an enhanced-format metafile handle",
        "_WinAPI_DeleteEnhMetaFile ( $hEmf )",
        [
            "$hEmf": "Handle to an enhanced metafile",
        ];

    "_WinAPI_DeleteFile" => "Deletes an existing file",
        "_WinAPI_DeleteFile ( $sFilePath )",
        [
            "$sFilePath": "The name of the file to be deleted",
        ];

    "_WinAPI_DeleteObject" => "Deletes a logical pen, brush, font, bitmap, region, or palette",
        "_WinAPI_DeleteObject ( $hObject )",
        [
            "$hObject": "Identifies a logical pen, brush, font, bitmap, region, or palette",
        ];

    "_WinAPI_DeleteObjectID" => "Deletes the object identifier for the specified file or directory",
        "_WinAPI_DeleteObjectID ( $sFilePath )",
        [
            "$sFilePath": "The path to the file or directory",
        ];

    "_WinAPI_DeleteVolumeMountPoint" => "Deletes a drive letter or mounted folder",
        "_WinAPI_DeleteVolumeMountPoint ( $sMountedPath )",
        [
            "$sMountedPath": "The drive letter or mounted folder to be deleted, e.g. \"X:\\\" or \"Y:\\MountX\\\"",
        ];

    "_WinAPI_DeregisterShellHookWindow" => "Unregisters a specified Shell window that is registered to receive Shell hook messages",
        "_WinAPI_DeregisterShellHookWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be unregistered",
        ];

    "_WinAPI_DestroyCaret" => "Destroys the caret's current shape, frees the caret from the window, and removes the caret from the screen",
        "_WinAPI_DestroyCaret ( )",
        [];

    "_WinAPI_DestroyCursor" => "Destroys a cursor and frees any memory the cursor occupied",
        "_WinAPI_DestroyCursor ( $hCursor )",
        [
            "$hCursor": "Handle to the cursor to be destroyed",
        ];

    "_WinAPI_DestroyIcon" => "Destroys an icon and frees any memory the icon occupied",
        "_WinAPI_DestroyIcon ( $hIcon )",
        [
            "$hIcon": "Handle to the icon to be destroyed. The icon must not be in use.",
        ];

    "_WinAPI_DestroyWindow" => "Destroys the specified window",
        "_WinAPI_DestroyWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be destroyed",
        ];

    "_WinAPI_DeviceIoControl" => "Sends a control code directly to a specified device driver",
        "_WinAPI_DeviceIoControl ( $hDevice, $iControlCode [, $pInBuffer = 0 [, $iInBufferSize = 0 [, $pOutBuffer = 0 [, $iOutBufferSize = 0]]]] )",
        [
            "$hDevice": "Handle to the device on which the operation is to be performed",
            "$iControlCode": "The control code for the operation",
            "$pInBuffer": "**[optional]** A pointer to the input buffer that contains the data required to perform the operation",
            "$iInBufferSize": "**[optional]** The size of the input buffer, in bytes",
            "$pOutBuffer": "**[optional]** A pointer to the output buffer that is to receive the data returned by the operation",
            "$iOutBufferSize": "**[optional]** The size of the output buffer, in bytes",
        ];

    "_WinAPI_DisplayStruct" => "Displays the structure with its contents in a list view",
        "_WinAPI_DisplayStruct ( $tStruct [, $sStruct = '' [, $sTitle = '' [, $iItem = 0 [, $iSubItem = 0 [, $iFlags = 0 [, $bTop = True [, $hParent = 0]]]]]]] )",
        [
            "$tStruct": "The structure to display, or a pointer to the memory block",
            "$sStruct": "**[optional]** The string representing the structure",
            "$sTitle": "**[optional]** The title of the window",
            "$iItem": "**[optional]** The item of the list view to select",
            "$iSubItem": "**[optional]** The sub item of the list view to select",
            "$iFlags": "**[optional]** The flags that define the behavior of the window, e.g. $DS_HEX or $DS_NOGRID",
            "$bTop": "**[optional]** Specifies whether the window is topmost",
            "$hParent": "**[optional]** Handle to the parent window",
        ];

    "_WinAPI_DllGetVersion" => "Retrieves a version information of the specified DLL",
        "_WinAPI_DllGetVersion ( $sFilePath )",
        [
            "$sFilePath": "The path to the DLL file",
        ];

    "_WinAPI_DllInstall" => "Registers an OLE server or ActiveX control",
        "_WinAPI_DllInstall ( $sFilePath )",
        [
            "$sFilePath": "The path of the DLL file",
        ];

    "_WinAPI_DllUninstall" => "Unregisters an OLE server or ActiveX control",
        "_WinAPI_DllUninstall ( $sFilePath )",
        [
            "$sFilePath": "The path of the DLL file",
        ];

    "_WinAPI_DPtoLP" => "Converts device coordinates into logical coordinates",
        "_WinAPI_DPtoLP ( $hDC, ByRef $tPOINT [, $iCount = 1] )",
        [
            "$hDC": "Handle to the device context",
            "$tPOINT": "$tagPOINT structure, or an array of them, that contains the coordinates to be transformed",
            "$iCount": "**[optional]** The number of points in the $tPOINT array",
        ];

    "_WinAPI_DragAcceptFiles" => "Registers whether a window accepts dropped files",
        "_WinAPI_DragAcceptFiles ( $hWnd [, $bAccept = True] )",
        [
            "$hWnd": "Handle to the window registering whether it accepts dropped files",
            "$bAccept": "**[optional]** Specifies whether the window accepts dropped files",
        ];

    "_WinAPI_DragFinish" => "Releases memory that the system allocated for use in transferring file names to the application",
        "_WinAPI_DragFinish ( $hDrop )",
        [
            "$hDrop": "Handle to the drop structure that describes the dropped file, from the $wParam in $WM_DROPFILES",
        ];

    "_WinAPI_DragQueryFileEx" => "Retrieves the names of dropped files that result from a successful drag-and-drop operation",
        "_WinAPI_DragQueryFileEx ( $hDrop [, $iFlag = 0] )",
        [
            "$hDrop": "Handle to the drop structure that contains the file names of the dropped files",
            "$iFlag": "**[optional]** The flag that specifies whether to return files and folders:\n    0 - Return both files and folders\n    1 - Return files only\n    2 - Return folders only",
        ];

    "_WinAPI_DragQueryPoint" => "Retrieves the position of the mouse pointer at the time a file was dropped during a drag-and-drop operation",
        "_WinAPI_DragQueryPoint ( $hDrop )",
        [
            "$hDrop": "Handle to the drop structure that describes the dropped file",
        ];

    "_WinAPI_DrawAnimatedRects" => "Animates the caption of a window to indicate the opening of an icon or the minimizing or maximizing of a window",
        "_WinAPI_DrawAnimatedRects ( $hWnd, $tRectFrom, $tRectTo )",
        [
            "$hWnd": "Handle to the window to which the rectangle is clipped",
            "$tRectFrom": "$tagRECT structure that specifies the location and size of the minimized or maximized window",
            "$tRectTo": "$tagRECT structure that specifies the location and size of the restored window",
        ];

    "_WinAPI_DrawBitmap" => "Draws a bitmap into the specified device context",
        "_WinAPI_DrawBitmap ( $hDC, $iX, $iY, $hBitmap [, $iRop = 0x00CC0020] )",
        [
            "$hDC": "Handle to the destination device context",
            "$iX": "The x-coordinate, in logical units, of the upper-left corner of the bitmap",
            "$iY": "The y-coordinate, in logical units, of the upper-left corner of the bitmap",
            "$hBitmap": "Handle to the bitmap to draw",
            "$iRop": "**[optional]** The raster-operation code, e.g. $SRCCOPY or $SRCAND",
        ];

    "_WinAPI_DrawEdge" => "Draws one or more edges of rectangle",
        "_WinAPI_DrawEdge ( $hDC, $tRECT, $iEdgeType, $iFlags )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
            "$iEdgeType": "Specifies the type of inner and outer edges to draw, e.g. $EDGE_BUMP, $EDGE_ETCHED, $EDGE_RAISED or $EDGE_SUNKEN",
            "$iFlags": "Specifies the type of border, e.g. $BF_RECT, $BF_LEFT, $BF_TOP, $BF_RIGHT, $BF_BOTTOM, $BF_DIAGONAL or $BF_ADJUST",
        ];

    "_WinAPI_DrawFocusRect" => "Draws a rectangle in the style used to indicate that the rectangle has the focus",
        "_WinAPI_DrawFocusRect ( $hDC, $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that specifies the logical coordinates of the rectangle",
        ];

    "_WinAPI_DrawFrameControl" => "Draws a frame control of the specified type and style",
        "_WinAPI_DrawFrameControl ( $hDC, $tRECT, $iType, $iState )",
        [
            "$hDC": "Handle to the device context of the window in which to draw the control",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the bounding rectangle for frame control",
            "$iType": "Specifies the type of frame control to draw:\n    $DFC_BUTTON - Standard button\n    $DFC_CAPTION - Title bar\n    $DFC_MENU - Menu bar\n    $DFC_POPUPMENU - Popup menu item\n    $DFC_SCROLL - Scroll bar",
            "$iState": "Specifies the initial state of the frame control",
        ];

    "_WinAPI_DrawIcon" => "Draws an icon or cursor into the specified device context",
        "_WinAPI_DrawIcon ( $hDC, $iX, $iY, $hIcon )",
        [
            "$hDC": "Handle to the device context into which the icon or cursor is drawn",
            "$iX": "Specifies the logical x-coordinate of the upper-left corner of the icon",
            "$iY": "Specifies the logical y-coordinate of the upper-left corner of the icon",
            "$hIcon": "Handle to the icon to be drawn",
        ];

    "_WinAPI_DrawIconEx" => "Draws an icon or cursor into the specified device context",
        "_WinAPI_DrawIconEx ( $hDC, $iX, $iY, $hIcon [, $iWidth = 0 [, $iHeight = 0 [, $iStep = 0 [, $hBrush = 0 [, $iFlags = 3]]]]] )",
        [
            "$hDC": "Handle to the device context into which the icon or cursor is drawn",
            "$iX": "Specifies the logical x-coordinate of the upper-left corner of the icon",
            "$iY": "Specifies the logical y-coordinate of the upper-left corner of the icon",
            "$hIcon": "Handle to the icon to be drawn",
            "$iWidth": "**[optional]** Specifies the logical width of the icon or cursor. If this parameter is zero and the $iFlags parameter is \"default size\", the function uses the $SM_CXICON or $SM_CXCURSOR system metric value to set the width. If this is zero and \"default size\" is not used, the function uses the actual resource width.",
            "$iHeight": "**[optional]** Specifies the logical height of the icon or cursor. If this parameter is zero and the $iFlags parameter is \"default size\", the function uses the $SM_CYICON or $SM_CYCURSOR system metric value to set the height. If this is zero and \"default size\" is not used, the function uses the actual resource height.",
            "$iStep": "**[optional]** Specifies the index of the frame to draw if $hIcon identifies an animated cursor. This parameter is ignored if $hIcon does not identify an animated cursor.",
            "$hBrush": "**[optional]** Handle to a brush that the system uses for flicker-free drawing. If $hBrush is a valid brush handle, the system creates an offscreen bitmap using the specified brush for the background color, draws the icon or cursor into the bitmap, and then copies the bitmap into the device context identified by $hDC.",
            "$iFlags": "**[optional]** Specifies the drawing flags:\n    1 - Draws the icon or cursor using the mask\n    2 - Draws the icon or cursor using the image\n    3 - Draws the icon or cursor using the mask and image\n    4 - Draws the icon or cursor using the system default image\n    5 - Draws the icon or cursor using the width and height specified by the system metric values",
        ];

    "_WinAPI_DrawLine" => "Draws a line",
        "_WinAPI_DrawLine ( $hDC, $iX1, $iY1, $iX2, $iY2 )",
        [
            "$hDC": "Handle to device context",
            "$iX1": "X coordinate of the line's starting point.",
            "$iY1": "Y coordinate of the line's starting point.",
            "$iX2": "X coordinate of the line's ending point.",
            "$iY2": "Y coordinate of the line's ending point.",
        ];

    "_WinAPI_DrawMenuBar" => "Redraws the menu bar of the specified window",
        "_WinAPI_DrawMenuBar ( $hWnd )",
        [
            "$hWnd": "Handle to the window whose menu bar is to be redrawn",
        ];

    "_WinAPI_DrawShadowText" => "Draws formatted text in the specified rectangle with a drop shadow",
        "_WinAPI_DrawShadowText ( $hDC, $sText, $iRGBText, $iRGBShadow [, $iXOffset = 0 [, $iYOffset = 0 [, $tRECT = 0 [, $iFlags = 0]]]] )",
        [
            "$hDC": "Handle to the device context",
            "$sText": "The string that contains the text to be drawn",
            "$iRGBText": "The color of the text",
            "$iRGBShadow": "The color of the shadow",
            "$iXOffset": "**[optional]** The x-coordinate of where the text should begin",
            "$iYOffset": "**[optional]** The y-coordinate of where the text should begin",
            "$tRECT": "**[optional]** $tagRECT structure that contains, in logical coordinates, the rectangle in which the text is to be drawn",
            "$iFlags": "**[optional]** The method of formatting the text, e.g. $DT_CENTER or $DT_SINGLELINE",
        ];

    "_WinAPI_DrawState" => "Displays an image and applies a visual effect to indicate a state, such as a disabled or default state",
        "_WinAPI_DrawState ( $hDC, $hBrush, $hData, $iX, $iY, $iWidth, $iHeight, $iFlags )",
        [
            "$hDC": "Handle to the device context to draw in",
            "$hBrush": "Handle to the brush used to draw the image if the state specified by $iFlags is $DSS_MONO",
            "$hData": "The information about the image, usually a bitmap or icon handle",
            "$iX": "The horizontal location, in device units, at which to draw the image",
            "$iY": "The vertical location, in device units, at which to draw the image",
            "$iWidth": "The width of the image, in device units",
            "$iHeight": "The height of the image, in device units",
            "$iFlags": "The image type and state, e.g. $DST_BITMAP, $DST_ICON, $DSS_DISABLED or $DSS_UNION",
        ];

    "_WinAPI_DrawText" => "Draws formatted text in the specified rectangle",
        "_WinAPI_DrawText ( $hDC, $sText, ByRef $tRECT, $iFlags )",
        [
            "$hDC": "Identifies the device context",
            "$sText": "The string to be drawn",
            "$tRECT": "$tagRECT structure that contains the rectangle for the text",
            "$iFlags": "Specifies the method of formatting the text, e.g. $DT_BOTTOM, $DT_CALCRECT, $DT_CENTER, $DT_EXPANDTABS, $DT_LEFT, $DT_NOCLIP, $DT_RIGHT, $DT_SINGLELINE, $DT_TOP, $DT_VCENTER or $DT_WORDBREAK",
        ];

    "_WinAPI_DrawThemeBackground" => "Draws the border and fill defined by the visual style for the specified control part",
        "_WinAPI_DrawThemeBackground ( $hTheme, $iPartID, $iStateID, $hDC, $tRECT [, $tCLIP = 0] )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The control part to draw",
            "$iStateID": "The state of the part to draw",
            "$hDC": "Handle to the device context used for drawing",
            "$tRECT": "$tagRECT structure that contains the rectangle, in logical coordinates, in which the background image is drawn",
            "$tCLIP": "**[optional]** $tagRECT structure that contains a clipping rectangle",
        ];

    "_WinAPI_DrawThemeEdge" => "Draws one or more edges defined by the visual style of a rectangle",
        "_WinAPI_DrawThemeEdge ( $hTheme, $iPartID, $iStateID, $hDC, $tRECT, $iEdge, $iFlags [, $tAREA = 0] )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The part that contains the rectangle",
            "$iStateID": "The state of the part",
            "$hDC": "Handle to the device context used for drawing",
            "$tRECT": "$tagRECT structure that contains the rectangle, in logical coordinates, that specifies the bounds of the drawn edge",
            "$iEdge": "The type of inner and outer edges to draw, e.g. $BDR_RAISEDINNER or $EDGE_BUMP",
            "$iFlags": "The type of border to draw, e.g. $BF_ADJUST, $BF_BOTTOM or $BF_RECT",
            "$tAREA": "**[optional]** $tagRECT structure that receives the interior rectangle if $iFlags is set to $BF_ADJUST",
        ];

    "_WinAPI_DrawThemeIcon" => "Draws an image from an image list with the icon effect defined by the visual style",
        "_WinAPI_DrawThemeIcon ( $hTheme, $iPartID, $iStateID, $hDC, $tRECT, $hIL, $iIndex )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The part in which the image is drawn",
            "$iStateID": "The state of the part",
            "$hDC": "Handle to the device context used for drawing",
            "$tRECT": "$tagRECT structure that contains the rectangle, in logical coordinates, in which the image is drawn",
            "$hIL": "Handle to an image list that contains the image to be drawn",
            "$iIndex": "The index into the image list that specifies the image to draw",
        ];

    "_WinAPI_DrawThemeParentBackground" => "Draws the part of a parent control that is covered by a partially-transparent or alpha-blended child control",
        "_WinAPI_DrawThemeParentBackground ( $hWnd, $hDC [, $tRECT = 0] )",
        [
            "$hWnd": "Handle to the child control",
            "$hDC": "Handle to the child control's device context",
            "$tRECT": "**[optional]** $tagRECT structure that defines the area to be drawn, in child coordinates",
        ];

    "_WinAPI_DrawThemeText" => "Draws text using the color and font defined by the visual style",
        "_WinAPI_DrawThemeText ( $hTheme, $iPartID, $iStateID, $hDC, $sText, $tRECT, $iFlags )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The part that contains the text",
            "$iStateID": "The state of the part",
            "$hDC": "Handle to the device context used for drawing",
            "$sText": "The text to draw",
            "$tRECT": "$tagRECT structure that contains the rectangle, in logical coordinates, in which the text is to be drawn",
            "$iFlags": "The method of formatting the text, e.g. $DT_CENTER, $DT_SINGLELINE or $DT_VCENTER",
        ];

    "_WinAPI_DuplicateEncryptionInfoFile" => "Copies the EFS metadata from one file or directory to another",
        "_WinAPI_DuplicateEncryptionInfoFile ( $sSrcFilePath, $sDestFilePath [, $iCreation = 2 [, $iAttributes = 0 [, $tSecurity = 0]]] )",
        [
            "$sSrcFilePath": "The name of the file or directory from which the EFS metadata is to be copied",
            "$sDestFilePath": "The name of the file or directory to which the EFS metadata is to be copied",
            "$iCreation": "**[optional]** Specifies how the destination file is to be created if it does not exist",
            "$iAttributes": "**[optional]** The file attributes for the destination file",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the destination file",
        ];

    "_WinAPI_DuplicateHandle" => "Duplicates an object handle",
        "_WinAPI_DuplicateHandle ( $hSourceProcessHandle, $hSourceHandle, $hTargetProcessHandle, $iDesiredAccess, $iInheritHandle, $iOptions )",
        [
            "$hSourceProcessHandle": "A handle to the process with the handle to be duplicated",
            "$hSourceHandle": "The handle to be duplicated",
            "$hTargetProcessHandle": "A handle to the process that is to receive the duplicated handle",
            "$iDesiredAccess": "The access requested for the new handle",
            "$iInheritHandle": "A variable that indicates whether the handle is inheritable",
            "$iOptions": "Optional actions:\n    $DUPLICATE_CLOSE_SOURCE - Closes the source handle. This occurs regardless of any error status returned.\n    $DUPLICATE_SAME_ACCESS - Ignores the $iDesiredAccess parameter. The duplicate handle has the same access as the source handle.",
        ];

    "_WinAPI_DuplicateTokenEx" => "Creates a new access token that duplicates an existing token",
        "_WinAPI_DuplicateTokenEx ( $hToken, $iAccess, $iLevel [, $iType = $TOKENPRIMARY [, $tSecurity = 0]] )",
        [
            "$hToken": "A handle to an access token opened with $TOKEN_DUPLICATE access",
            "$iAccess": "The requested access rights for the new token",
            "$iLevel": "The impersonation level for the new token, e.g. $SECURITYANONYMOUS, $SECURITYIDENTIFICATION, $SECURITYIMPERSONATION or $SECURITYDELEGATION",
            "$iType": "**[optional]** The token type, $TOKENPRIMARY or $TOKENIMPERSONATION",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new token",
        ];

    "_WinAPI_DwmDefWindowProc" => "Default window procedure for Desktop Window Manager (DWM) hit testing within the non-client area",
        "_WinAPI_DwmDefWindowProc ( $hWnd, $iMsg, $wParam, $lParam )",
        [
            "$hWnd": "Handle to the window procedure that received the message",
            "$iMsg": "The message",
            "$wParam": "Additional message information",
            "$lParam": "Additional message information",
        ];

    "_WinAPI_DwmEnableBlurBehindWindow" => "Enables the blur effect on a specified window",
        "_WinAPI_DwmEnableBlurBehindWindow ( $hWnd [, $bEnable = True [, $bTransition = False [, $hRgn = 0]]] )",
        [
            "$hWnd": "Handle to the window on which the blur behind data is applied",
            "$bEnable": "**[optional]** Specifies whether to register the window handle to DWM blur behind",
            "$bTransition": "**[optional]** Specifies whether the window's colorization should transition to match the maximized windows",
            "$hRgn": "**[optional]** The region within the client area where the blur behind will be applied. If 0, the entire client area is used.",
        ];

    "_WinAPI_DwmEnableComposition" => "Enables or disables Desktop Window Manager (DWM) composition",
        "_WinAPI_DwmEnableComposition ( $bEnable )",
        [
            "$bEnable": "Specifies whether to enable DWM composition",
        ];

    "_WinAPI_DwmExtendFrameIntoClientArea" => "Extends the window frame into the client area",
        "_WinAPI_DwmExtendFrameIntoClientArea ( $hWnd [, $tMARGINS = 0] )",
        [
            "$hWnd": "Handle to the window in which the frame will be extended into the client area",
            "$tMARGINS": "**[optional]** $tagMARGINS structure that describes the margins to use when extending the frame. If 0, the frame is extended to the entire client area.",
        ];

    "_WinAPI_DwmGetColorizationColor" => "Retrieves the current color used for Desktop Window Manager (DWM) glass composition",
        "_WinAPI_DwmGetColorizationColor ( )",
        [];

    "_WinAPI_DwmGetColorizationParameters" => "Retrieves the colorization parameters used for Desktop Window Manager (DWM)",
        "_WinAPI_DwmGetColorizationParameters ( )",
        [];

    "_WinAPI_DwmGetWindowAttribute" => "Retrieves the current value of a specified attribute applied to a window",
        "_WinAPI_DwmGetWindowAttribute ( $hWnd, $iAttribute )",
        [
            "$hWnd": "Handle to the window from which the attribute data is retrieved",
            "$iAttribute": "The attribute to retrieve, e.g. $DWMWA_CAPTION_BUTTON_BOUNDS, $DWMWA_EXTENDED_FRAME_BOUNDS or $DWMWA_NCRENDERING_ENABLED",
        ];

    "_WinAPI_DwmInvalidateIconicBitmaps" => "Indicates that all previously supplied iconic bitmaps from a window, both thumbnails and peek representations, should be refreshed",
        "_WinAPI_DwmInvalidateIconicBitmaps ( $hWnd )",
        [
            "$hWnd": "Handle to the window or tab whose bitmaps are being invalidated",
        ];

    "_WinAPI_DwmIsCompositionEnabled" => "Obtains a value that indicates whether Desktop Window Manager (DWM) composition is enabled",
        "_WinAPI_DwmIsCompositionEnabled ( )",
        [];

    "_WinAPI_DwmQueryThumbnailSourceSize" => "Retrieves the source size of the Desktop Window Manager (DWM) thumbnail",
        "_WinAPI_DwmQueryThumbnailSourceSize ( $hThumbnail )",
        [
            "$hThumbnail": "Handle to the thumbnail to retrieve the source window size from",
        ];

    "_WinAPI_DwmRegisterThumbnail" => "Creates a Desktop Window Manager (DWM) thumbnail relationship between the destination and source windows",
        "_WinAPI_DwmRegisterThumbnail ( $hDestination, $hSource )",
        [
            "$hDestination": "Handle to the window that will use the DWM thumbnail",
            "$hSource": "Handle to the window to use as the thumbnail source",
        ];

    "_WinAPI_DwmSetColorizationParameters" => "Sets the colorization parameters for Desktop Window Manager (DWM)",
        "_WinAPI_DwmSetColorizationParameters ( $tDWMCP )",
        [
            "$tDWMCP": "$tagDWM_COLORIZATION_PARAMETERS structure containing the colorization parameters",
        ];

    "_WinAPI_DwmSetIconicLivePreviewBitmap" => "Sets a static, iconic bitmap to display a live preview (also known as a Peek preview) of a window or tab",
        "_WinAPI_DwmSetIconicLivePreviewBitmap ( $hWnd, $hBitmap [, $bFrame = False [, $tClient = 0]] )",
        [
            "$hWnd": "Handle to the window or tab",
            "$hBitmap": "Handle to the device independent bitmap (DIB) to represent the specified window",
            "$bFrame": "**[optional]** Specifies whether to display a frame around the provided bitmap",
            "$tClient": "**[optional]** $tagPOINT structure that specifies the offset of a tab window's client region from the host window's frame",
        ];

    "_WinAPI_DwmSetIconicThumbnail" => "Sets a static, iconic bitmap on a window or tab to use as a thumbnail representation",
        "_WinAPI_DwmSetIconicThumbnail ( $hWnd, $hBitmap [, $bFrame = False] )",
        [
            "$hWnd": "Handle to the window or tab",
            "$hBitmap": "Handle to the bitmap to represent the window that $hWnd specifies",
            "$bFrame": "**[optional]** Specifies whether to display a frame around the provided thumbnail",
        ];

    "_WinAPI_DwmSetWindowAttribute" => "Sets the value of the specified attributes for non-client rendering to apply to the window",
        "_WinAPI_DwmSetWindowAttribute ( $hWnd, $iAttribute, $iData )",
        [
            "$hWnd": "Handle to the window that will receive the attributes",
            "$iAttribute": "The attribute to be set, e.g. $DWMWA_NCRENDERING_POLICY, $DWMWA_TRANSITIONS_FORCEDISABLED or $DWMWA_FORCE_ICONIC_REPRESENTATION",
            "$iData": "The value of the attribute",
        ];

    "_WinAPI_DwmUnregisterThumbnail" => "Removes a Desktop Window Manager (DWM) thumbnail relationship created by the _WinAPI_DwmRegisterThumbnail() function",
        "_WinAPI_DwmUnregisterThumbnail ( $hThumbnail )",
        [
            "$hThumbnail": "Handle to the thumbnail relationship to be removed",
        ];

    "_WinAPI_DwmUpdateThumbnailProperties" => "Specifies Desktop Window Manager (DWM) thumbnail properties",
        "_WinAPI_DwmUpdateThumbnailProperties ( $hThumbnail [, $bVisible = True [, $bClientAreaOnly = False [, $iOpacity = 255 [, $tRectDest = 0 [, $tRectSrc = 0]]]]] )",
        [
            "$hThumbnail": "Handle to the DWM thumbnail to be updated",
            "$bVisible": "**[optional]** Specifies whether to make the thumbnail visible",
            "$bClientAreaOnly": "**[optional]** Specifies whether to use only the thumbnail source's client area",
            "$iOpacity": "**[optional]** The opacity with which to render the thumbnail, 0 to 255",
            "$tRectDest": "**[optional]** $tagRECT structure that specifies the area in the destination window where the thumbnail will be rendered",
            "$tRectSrc": "**[optional]** $tagRECT structure that specifies the region of the source window to use as the thumbnail",
        ];

    "_WinAPI_DWordToFloat" => "Converts a value of type DWORD to a value of type FLOAT",
        "_WinAPI_DWordToFloat ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_DWordToInt" => "Converts a value of type DWORD to a value of type INT",
        "_WinAPI_DWordToInt ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_EjectMedia" => "Ejects media from a device",
        "_WinAPI_EjectMedia ( $sDrive )",
        [
            "$sDrive": "The drive letter of the device from which to eject media, in the format D:, E:, etc.",
        ];

    "_WinAPI_Ellipse" => "Draws an ellipse",
        "_WinAPI_Ellipse ( $hDC, $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the bounding rectangle",
        ];

    "_WinAPI_EmptyWorkingSet" => "Removes as many pages as possible from the working set of the specified process",
        "_WinAPI_EmptyWorkingSet ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_EnableThemeDialogTexture" => "Enables or disables the visual style of the background of a dialog window",
        "_WinAPI_EnableThemeDialogTexture ( $hWnd, $iFlags )",
        [
            "$hWnd": "Handle to the target dialog box or window",
            "$iFlags": "The flags that control the application of visual styles, e.g. $ETDT_DISABLE, $ETDT_ENABLE or $ETDT_ENABLETAB",
        ];

    "_WinAPI_EnableWindow" => "Enables or disables mouse and keyboard input to the specified window or control",
        "_WinAPI_EnableWindow ( $hWnd [, $bEnable = True] )",
        [
            "$hWnd": "Handle to the window to be enabled or disabled",
            "$bEnable": "**[optional]** Specify whether to enable or disable the window:\n    True - The window is enabled\n    False - The window is disabled",
        ];

    "_WinAPI_EncryptFile" => "Encrypts a file or directory",
        "_WinAPI_EncryptFile ( $sFilePath )",
        [
            "$sFilePath": "The name of the file or directory to be encrypted",
        ];

    "_WinAPI_EncryptionDisable" => "Disables or enables encryption of the specified directory and the files in it",
        "_WinAPI_EncryptionDisable ( $sDir, $bDisable )",
        [
            "$sDir": "The name of the directory for which to enable or disable encryption",
            "$bDisable": "Specifies whether to disable encryption",
        ];

    "_WinAPI_EndDeferWindowPos" => "Simultaneously updates the position and size of one or more windows in a single screen-refreshing cycle",
        "_WinAPI_EndDeferWindowPos ( $hInfo )",
        [
            "$hInfo": "Handle to a multiple-window-position structure",
        ];

    "_WinAPI_EndPaint" => "Marks the end of painting in the specified window",
        "_WinAPI_EndPaint ( $hWnd, ByRef $tPAINTSTRUCT )",
        [
            "$hWnd": "Handle to the window that has been repainted",
            "$tPAINTSTRUCT": "$tagPAINTSTRUCT structure that contains the painting information retrieved by _WinAPI_BeginPaint()",
        ];

    "_WinAPI_EndPath" => "Closes a path bracket and selects the path defined by the bracket into the specified device context",
        "_WinAPI_EndPath ( $hDC )",
        [
            "$hDC": "Handle to the device context into which the new path is selected",
        ];

    "_WinAPI_EndUpdateResource" => "Commits or discards changes made prior to a call to _WinAPI_UpdateResource()",
        "_WinAPI_EndUpdateResource ( $hUpdate [, $bDiscard = False] )",
        [
            "$hUpdate": "A module handle returned by the _WinAPI_BeginUpdateResource() function",
            "$bDiscard": "**[optional]** Specifies whether to write the resource updates to the file",
        ];

    "_WinAPI_EnumChildProcess" => "Enumerates child processes that belong to the specified process",
        "_WinAPI_EnumChildProcess ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the parent process. Default (0) is the current process.",
        ];

    "_WinAPI_EnumChildWindows" => "Enumerates the child windows that belong to the specified parent window",
        "_WinAPI_EnumChildWindows ( $hWnd [, $bVisible = True] )",
        [
            "$hWnd": "Handle to the parent window whose child windows are to be enumerated",
            "$bVisible": "**[optional]** Specifies whether to enumerate only visible windows",
        ];

    "_WinAPI_EnumDesktops" => "Enumerates all desktops associated with the specified window station of the calling process",
        "_WinAPI_EnumDesktops ( $hStation )",
        [
            "$hStation": "Handle to the window station whose desktops are to be enumerated",
        ];

    "_WinAPI_EnumDesktopWindows" => "Enumerates all top-level windows associated with the specified desktop",
        "_WinAPI_EnumDesktopWindows ( $hDesktop [, $bVisible = True] )",
        [
            "$hDesktop": "Handle to the desktop whose top-level windows are to be enumerated",
            "$bVisible": "**[optional]** Specifies whether to enumerate only visible windows",
        ];

    "_WinAPI_EnumDeviceDrivers" => "Retrieves the load address for each device driver in the system",
        "_WinAPI_EnumDeviceDrivers ( )",
        [];

    "_WinAPI_EnumDisplayDevices" => "Obtains information about the display devices in a system",
        "_WinAPI_EnumDisplayDevices ( $sDevice, $iDevNum )",
        [
            "$sDevice": "Device name. If blank, the function returns information for the display adapters on the machine based on $iDevNum.",
            "$iDevNum": "0-based index value that specifies the display device of interest",
        ];

    "_WinAPI_EnumDisplayMonitors" => "Enumerates display monitors (including invisible pseudo-monitors associated with the mirroring drivers)",
        "_WinAPI_EnumDisplayMonitors ( [$hDC = 0 [, $tRECT = 0]] )",
        [
            "$hDC": "**[optional]** Handle to a display device context that defines the visible region of interest",
            "$tRECT": "**[optional]** $tagRECT structure that specifies a clipping rectangle",
        ];

    "_WinAPI_EnumDisplaySettings" => "Retrieves information about one of the graphics modes for a display device",
        "_WinAPI_EnumDisplaySettings ( $sDevice, $iMode )",
        [
            "$sDevice": "The display device about whose graphics mode the function will obtain information. If empty, the current display device is used.",
            "$iMode": "The type of information to be retrieved, $ENUM_CURRENT_SETTINGS, $ENUM_REGISTRY_SETTINGS or a graphics mode index",
        ];

    "_WinAPI_EnumDllProc" => "Enumerates an exported functions of the specified dynamic-link library (DLL)",
        "_WinAPI_EnumDllProc ( $sFilePath [, $sMask = '' [, $iFlags = 0]] )",
        [
            "$sFilePath": "The path to the library",
            "$sMask": "**[optional]** The mask that specifies which functions to enumerate, separated by \";\"",
            "$iFlags": "**[optional]** The flags that define the behavior of the function, e.g. $ENUM_DLLPROC_NOSYMBOL or $ENUM_DLLPROC_CASESENSITIVE",
        ];

    "_WinAPI_EnumFiles" => "Enumerates the files and subdirectories for the specified directory with a name that matches the template",
        "_WinAPI_EnumFiles ( $sDir [, $iFlag = 0 [, $sTemplate = '' [, $bExclude = False]]] )",
        [
            "$sDir": "The path to the directory to enumerate",
            "$iFlag": "**[optional]** The flag that specifies which objects to enumerate:\n    0 - Files and directories\n    1 - Files only\n    2 - Directories only",
            "$sTemplate": "**[optional]** The template to match file names, separated by \";\"",
            "$bExclude": "**[optional]** Specifies whether to exclude the matching names instead of including them",
        ];

    "_WinAPI_EnumFileStreams" => "Enumerates all streams with a ::$DATA stream type in the specified file or directory",
        "_WinAPI_EnumFileStreams ( $sFilePath )",
        [
            "$sFilePath": "The name of the file or directory",
        ];

    "_WinAPI_EnumFontFamilies" => "Enumerates all uniquely-named fonts in the system that match the specified font characteristics",
        "_WinAPI_EnumFontFamilies ( [$hDC = 0 [, $sFaceName = '' [, $iCharSet = 1 [, $iFontType = 0x07 [, $sPattern = '' [, $bExclude = False]]]]]] )",
        [
            "$hDC": "**[optional]** Handle to the device context from which to enumerate the fonts",
            "$sFaceName": "**[optional]** The typeface name of the font. If empty, one font of each available typeface name is enumerated.",
            "$iCharSet": "**[optional]** The character set",
            "$iFontType": "**[optional]** The type of the fonts to enumerate, e.g. $DEVICE_FONTTYPE, $RASTER_FONTTYPE or $TRUETYPE_FONTTYPE",
            "$sPattern": "**[optional]** The regular expression pattern to compare with the full font name",
            "$bExclude": "**[optional]** Specifies whether fonts that match the pattern are excluded",
        ];

    "_WinAPI_EnumHardLinks" => "Enumerates all the hard links to the specified file",
        "_WinAPI_EnumHardLinks ( $sFilePath )",
        [
            "$sFilePath": "The name of the file",
        ];

    "_WinAPI_EnumMRUList" => "Enumerates the contents of the most recently used (MRU) list",
        "_WinAPI_EnumMRUList ( $hMRU, $iItem )",
        [
            "$hMRU": "Handle of the MRU list",
            "$iItem": "The index of the item to retrieve. If -1, the function returns the number of items in the list.",
        ];

    "_WinAPI_EnumProcessHandles" => "Enumerates a handles that belong to the specified process",
        "_WinAPI_EnumProcessHandles ( [$iPID = 0 [, $iType = 0]] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
            "$iType": "**[optional]** The type of handles to enumerate. If 0, all handles are enumerated.",
        ];

    "_WinAPI_EnumProcessModules" => "Retrieves a handle and name for each module in the specified process",
        "_WinAPI_EnumProcessModules ( [$iPID = 0 [, $iFlag = 0]] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
            "$iFlag": "**[optional]** The filter criteria:\n    $LIST_MODULES_32BIT\n    $LIST_MODULES_64BIT\n    $LIST_MODULES_ALL\n    $LIST_MODULES_DEFAULT",
        ];

    "_WinAPI_EnumProcessThreads" => "Enumerates threads that belong to the specified process",
        "_WinAPI_EnumProcessThreads ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_EnumProcessWindows" => "Enumerates windows that belong to the specified process",
        "_WinAPI_EnumProcessWindows ( [$iPID = 0 [, $bVisible = True]] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
            "$bVisible": "**[optional]** Specifies whether to enumerate only visible windows",
        ];

    "_WinAPI_EnumProps" => "Enumerates all entries in the property list of a window",
        "_WinAPI_EnumProps ( $hWnd )",
        [
            "$hWnd": "Handle to the window whose property list is to be enumerated",
        ];

    "_WinAPI_EnumResourceLanguages" => "Enumerates language-specific resources, of the specified type and name, associated with a binary module",
        "_WinAPI_EnumResourceLanguages ( $hModule, $sType, $sName )",
        [
            "$hModule": "The handle to a module to be searched, or the name of the file",
            "$sType": "The type of resource for which the language is being enumerated, e.g. $RT_ICON or $RT_STRING",
            "$sName": "The name of the resource for which the language is being enumerated",
        ];

    "_WinAPI_EnumResourceNames" => "Enumerates resources of a specified type within a binary module",
        "_WinAPI_EnumResourceNames ( $hModule, $sType )",
        [
            "$hModule": "The handle to a module to be searched, or the name of the file",
            "$sType": "The type of the resource for which the name is being enumerated, e.g. $RT_BITMAP, $RT_ICON or $RT_RCDATA",
        ];

    "_WinAPI_EnumResourceTypes" => "Enumerates resource types within a binary module",
        "_WinAPI_EnumResourceTypes ( $hModule )",
        [
            "$hModule": "The handle to a module to be searched, or the name of the file",
        ];

    "_WinAPI_EnumSystemGeoID" => "Enumerates the geographical location identifiers (GEOID) that are available on the operating system",
        "_WinAPI_EnumSystemGeoID ( )",
        [];

    "_WinAPI_EnumSystemLocales" => "Enumerates the locales that are either installed on or supported by an operating system",
        "_WinAPI_EnumSystemLocales ( $iFlag )",
        [
            "$iFlag": "The flag specifying the locale identifiers to enumerate, $LCID_INSTALLED or $LCID_SUPPORTED",
        ];

    "_WinAPI_EnumUILanguages" => "Enumerates the user interface languages that are available on the operating system",
        "_WinAPI_EnumUILanguages ( [$iFlag = 0] )",
        [
            "$iFlag": "**[optional]** The flag identifying the format of the user interface language, $MUI_LANGUAGE_ID or $MUI_LANGUAGE_NAME",
        ];

    "_WinAPI_EnumWindows" => "Enumerates all windows",
        "_WinAPI_EnumWindows ( [$bVisible = True [, $hWnd = Default]] )",
        [
            "$bVisible": "**[optional]** Window selection flag:\n    True - Returns only visible windows\n    False - Returns all windows",
            "$hWnd": "**[optional]** Start of the window list (default is the desktop window)",
        ];

    "_WinAPI_EnumWindowsPopup" => "Enumerates popup windows",
        "_WinAPI_EnumWindowsPopup ( )",
        [];

    "_WinAPI_EnumWindowStations" => "Enumerates all window stations in the current session",
        "_WinAPI_EnumWindowStations ( )",
        [];

    "_WinAPI_EnumWindowsTop" => "Enumerates all top level windows",
        "_WinAPI_EnumWindowsTop ( )",
        [];

    "_WinAPI_EqualRect" => "Determines whether the two specified rectangles are equal",
        "_WinAPI_EqualRect ( $tRECT1, $tRECT2 )",
        [
            "$tRECT1": "$tagRECT structure that contains the logical coordinates of the first rectangle",
            "$tRECT2": "$tagRECT structure that contains the logical coordinates of the second rectangle",
        ];

    "_WinAPI_EqualRgn" => "Checks the two specified regions to determine whether they are identical",
        "_WinAPI_EqualRgn ( $hRgn1, $hRgn2 )",
        [
            "$hRgn1": "Handle to a region",
            "$hRgn2": "Handle to a region",
        ];

    "_WinAPI_ExcludeClipRect" => "Creates a new clipping region that consists of the existing clipping region minus the specified rectangle",
        "_WinAPI_ExcludeClipRect ( $hDC, $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
        ];

    "_WinAPI_ExitWindowsEx" => "Logs off the interactive user, shuts down the system, or shuts down and restarts the system",
        "_WinAPI_ExitWindowsEx ( $iFlags [, $iReason = 0] )",
        [
            "$iFlags": "The shutdown type, e.g. $EWX_LOGOFF, $EWX_POWEROFF, $EWX_REBOOT, $EWX_SHUTDOWN or $EWX_FORCE",
            "$iReason": "**[optional]** The reason for initiating the shutdown",
        ];

    "_WinAPI_ExpandEnvironmentStrings" => "Expands environment variable strings and replaces them with their defined values",
        "_WinAPI_ExpandEnvironmentStrings ( $sString )",
        [
            "$sString": "String to convert for environment variables",
        ];

    "_WinAPI_ExtCreatePen" => "Creates a logical cosmetic or geometric pen that has the specified style, width, and brush attributes",
        "_WinAPI_ExtCreatePen ( $iPenStyle, $iWidth, $iBrushStyle, $iRGB [, $iHatch = 0 [, $aUserStyle = 0 [, $iStart = 0 [, $iEnd = -1]]]] )",
        [
            "$iPenStyle": "The combination of type, style, end cap, and join attributes",
            "$iWidth": "The width of the pen",
            "$iBrushStyle": "The brush style, e.g. $BS_HATCHED, $BS_HOLLOW or $BS_SOLID",
            "$iRGB": "The color of the pen",
            "$iHatch": "**[optional]** The hatch style",
            "$aUserStyle": "**[optional]** The array that contains the length of the dashes and spaces for $PS_USERSTYLE",
            "$iStart": "**[optional]** The index of array to start at",
            "$iEnd": "**[optional]** The index of array to stop at",
        ];

    "_WinAPI_ExtFloodFill" => "Fills an area of the display surface with the current brush",
        "_WinAPI_ExtFloodFill ( $hDC, $iX, $iY, $iRGB [, $iType = 0] )",
        [
            "$hDC": "Handle to a device context",
            "$iX": "The x-coordinate, in logical units, of the point where filling is to start",
            "$iY": "The y-coordinate, in logical units, of the point where filling is to start",
            "$iRGB": "The color of the boundary or of the area to be filled",
            "$iType": "**[optional]** The type of fill operation to be performed, $FLOODFILLBORDER or $FLOODFILLSURFACE",
        ];

    "_WinAPI_ExtractIconEx" => "Creates an array of handles to large or small icons extracted from a file",
        "_WinAPI_ExtractIconEx ( $sFilePath, $iIndex, $paLarge, $paSmall, $iIcons )",
        [
            "$sFilePath": "Name of an executable file, DLL, or icon file from which icons will be extracted",
            "$iIndex": "Specifies the zero-based index of the first icon to extract. If this value is a negative number and either $paLarge or $paSmall is not 0, the function begins by extracting the icon whose resource identifier is equal to the absolute value of $iIndex.",
            "$paLarge": "Pointer to an array of icon handles that receives handles to the large icons extracted from the file. If this parameter is 0, no large icons are extracted from the file.",
            "$paSmall": "Pointer to an array of icon handles that receives handles to the small icons extracted from the file. If this parameter is 0, no small icons are extracted from the file.",
            "$iIcons": "Specifies the number of icons to extract from the file",
        ];

    "_WinAPI_ExtSelectClipRgn" => "Combines the specified region with the current clipping region using the specified mode",
        "_WinAPI_ExtSelectClipRgn ( $hDC, $hRgn [, $iMode = 5] )",
        [
            "$hDC": "Handle to the device context",
            "$hRgn": "Handle to the region to be selected",
            "$iMode": "**[optional]** The operation to be performed, e.g. $RGN_AND, $RGN_COPY, $RGN_DIFF, $RGN_OR or $RGN_XOR",
        ];

    "_WinAPI_FatalAppExit" => "Displays a message box and terminates the application",
        "_WinAPI_FatalAppExit ( $sMessage )",
        [
            "$sMessage": "The string that is displayed in the message box",
        ];

    "_WinAPI_FatalExit" => "Transfers execution control to the debugger",
        "_WinAPI_FatalExit ( $iCode )",
        [
            "$iCode": "The error code associated with the exit",
        ];

    "_WinAPI_FileEncryptionStatus" => "Retrieves the encryption status of the specified file",
        "_WinAPI_FileEncryptionStatus ( $sFilePath )",
        [
            "$sFilePath": "The name of the file",
        ];

    "_WinAPI_FileExists" => "Checks whether the specified file exists",
        "_WinAPI_FileExists ( $sFilePath )",
        [
            "$sFilePath": "The path to the file",
        ];

    "_WinAPI_FileIconInit" => "Initializes or reinitializes the system image list",
        "_WinAPI_FileIconInit ( [$bRestore = True] )",
        [
            "$bRestore": "**[optional]** Specifies whether to restore the system image cache from disk",
        ];

    "_WinAPI_FileInUse" => "Tests if the specified file is used by another application",
        "_WinAPI_FileInUse ( $sFilePath )",
        [
            "$sFilePath": "The path to the file",
        ];

    "_WinAPI_FillMemory" => "Fills a block of memory with the given value",
        "_WinAPI_FillMemory ( $pMemory, $iLength [, $iValue = 0] )",
        [
            "$pMemory": "A pointer to the starting address of the block of memory to fill",
            "$iLength": "The number of bytes in the block of memory to be filled",
            "$iValue": "**[optional]** The byte value with which to fill the memory block",
        ];

    "_WinAPI_FillPath" => "Closes any open figures in the current path and fills the path's interior by using the current brush",
        "_WinAPI_FillPath ( $hDC )",
        [
            "$hDC": "Handle to a device context that contains a valid path",
        ];

    "_WinAPI_FillRect" => "Fills a rectangle by using the specified brush",
        "_WinAPI_FillRect ( $hDC, $tRECT, $hBrush )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure or pointer to it that contains the logical coordinates of the rectangle to be filled",
            "$hBrush": "Handle to the brush used to fill the rectangle",
        ];

    "_WinAPI_FillRgn" => "Fills a region by using the specified brush",
        "_WinAPI_FillRgn ( $hDC, $hRgn, $hBrush )",
        [
            "$hDC": "Handle to the device context",
            "$hRgn": "Handle to the region to be filled",
            "$hBrush": "Handle to the brush to be used to fill the region",
        ];

    "_WinAPI_FindClose" => "Closes a file search handle",
        "_WinAPI_FindClose ( $hSearch )",
        [
            "$hSearch": "The file search handle",
        ];

    "_WinAPI_FindCloseChangeNotification" => "Stops change notification handle monitoring",
        "_WinAPI_FindCloseChangeNotification ( $hChange )",
        [
            "$hChange": "Handle to a change notification handle created by the _WinAPI_FindFirstChangeNotification() function",
        ];

    "_WinAPI_FindExecutable" => "Retrieves the name of the executable file associated with the specified file name",
        "_WinAPI_FindExecutable ( $sFileName [, $sDirectory = \"\"] )",
        [
            "$sFileName": "Fully qualified path to existing file",
            "$sDirectory": "**[optional]** Default directory",
        ];

    "_WinAPI_FindFirstChangeNotification" => "Creates a change notification handle and sets up initial change notification filter conditions",
        "_WinAPI_FindFirstChangeNotification ( $sDirectory, $iFlags [, $bSubtree = False] )",
        [
            "$sDirectory": "The full path of the directory to be watched",
            "$iFlags": "The filter conditions that satisfy a change notification wait, e.g. $FILE_NOTIFY_CHANGE_FILE_NAME, $FILE_NOTIFY_CHANGE_DIR_NAME, $FILE_NOTIFY_CHANGE_SIZE or $FILE_NOTIFY_CHANGE_LAST_WRITE",
            "$bSubtree": "**[optional]** Specifies whether to monitor the directory or the directory tree",
        ];

    "_WinAPI_FindFirstFile" => "Searches a directory for a file or subdirectory with a name that matches a specific name",
        "_WinAPI_FindFirstFile ( $sFilePath, $tData )",
        [
            "$sFilePath": "The directory or path, and the file name, which can include wildcard characters",
            "$tData": "$tagWIN32_FIND_DATA structure that receives information about a found file or directory",
        ];

    "_WinAPI_FindFirstFileName" => "Creates an enumeration of all the hard links to the specified file",
        "_WinAPI_FindFirstFileName ( $sFilePath, ByRef $sLink )",
        [
            "$sFilePath": "The name of the file",
            "$sLink": "The variable that receives the first link name",
        ];

    "_WinAPI_FindFirstStream" => "Enumerates the first stream with a ::$DATA stream type in the specified file or directory",
        "_WinAPI_FindFirstStream ( $sFilePath, $tData )",
        [
            "$sFilePath": "The fully qualified file name",
            "$tData": "$tagWIN32_FIND_STREAM_DATA structure that receives the file stream data",
        ];

    "_WinAPI_FindNextChangeNotification" => "Requests that the operating system signal a change notification handle the next time it detects an appropriate change",
        "_WinAPI_FindNextChangeNotification ( $hChange )",
        [
            "$hChange": "Handle to a change notification handle",
        ];

    "_WinAPI_FindNextFile" => "Continues a file search from a previous call to the _WinAPI_FindFirstFile() function",
        "_WinAPI_FindNextFile ( $hSearch, $tData )",
        [
            "$hSearch": "The search handle returned by a previous call to the _WinAPI_FindFirstFile() function",
            "$tData": "$tagWIN32_FIND_DATA structure that receives information about the found file or subdirectory",
        ];

    "_WinAPI_FindNextFileName" => "Continues enumerating the hard links to a file",
        "_WinAPI_FindNextFileName ( $hSearch, ByRef $sLink )",
        [
            "$hSearch": "The search handle returned by a previous call to the _WinAPI_FindFirstFileName() function",
            "$sLink": "The variable that receives the next link name",
        ];

    "_WinAPI_FindNextStream" => "Continues a stream search started by a previous call to the _WinAPI_FindFirstStream() function",
        "_WinAPI_FindNextStream ( $hSearch, $tData )",
        [
            "$hSearch": "The search handle returned by a previous call to the _WinAPI_FindFirstStream() function",
            "$tData": "$tagWIN32_FIND_STREAM_DATA structure that receives information about the stream",
        ];

    "_WinAPI_FindResource" => "Determines the location of a resource with the specified type and name in the specified module",
        "_WinAPI_FindResource ( $hInstance, $sType, $sName )",
        [
            "$hInstance": "Handle to the module whose executable file contains the resource",
            "$sType": "The resource type, e.g. $RT_BITMAP, $RT_ICON or $RT_RCDATA",
            "$sName": "The name of the resource",
        ];

    "_WinAPI_FindResourceEx" => "Determines the location of the resource with the specified type, name, and language in the specified module",
        "_WinAPI_FindResourceEx ( $hInstance, $sType, $sName, $iLanguage )",
        [
            "$hInstance": "Handle to the module whose executable file contains the resource",
            "$sType": "The resource type",
            "$sName": "The name of the resource",
            "$iLanguage": "The language of the resource",
        ];

    "_WinAPI_FindTextDlg" => "Creates a system-defined modeless Find dialog box",
        "_WinAPI_FindTextDlg ( $hOwner [, $sFindWhat = '' [, $iFlags = 0 [, $pFindProc = 0 [, $lParam = 0]]]] )",
        [
            "$hOwner": "Handle to the window that owns the dialog box",
            "$sFindWhat": "**[optional]** The search string that is displayed in the Find what edit control",
            "$iFlags": "**[optional]** The flags that used to initialize the dialog box, e.g. $FR_DOWN, $FR_MATCHCASE or $FR_WHOLEWORD",
            "$pFindProc": "**[optional]** A pointer to a hook procedure",
            "$lParam": "**[optional]** Application-defined data that the system passes to the hook procedure",
        ];

    "_WinAPI_FindWindow" => "Retrieves the handle to the top-level window whose class name and window name match",
        "_WinAPI_FindWindow ( $sClassName, $sWindowName )",
        [
            "$sClassName": "A string that specifies the class name or is an atom that identifies the class-name string. If this parameter is an atom, it must be a global atom created by a call to the GlobalAddAtom function.",
            "$sWindowName": "A string that specifies the window name (the window's title). If this parameter is \"\", all window names match.",
        ];

    "_WinAPI_FindWindowEx" => "Retrieves a handle to a window whose class name and window name match the specified strings",
        "_WinAPI_FindWindowEx ( $hParent, $hAfter, $sClass [, $sTitle = ''] )",
        [
            "$hParent": "Handle to the parent window whose child windows are to be searched. If 0, the desktop window is used.",
            "$hAfter": "Handle to a child window. The search begins with the next child window in the Z order.",
            "$sClass": "The class name",
            "$sTitle": "**[optional]** The window name (the window's title). If an empty string, all window names match.",
        ];

    "_WinAPI_FlashWindow" => "Flashes the specified window one time",
        "_WinAPI_FlashWindow ( $hWnd [, $bInvert = True] )",
        [
            "$hWnd": "Handle to the window to be flashed. The window can be either open or minimized.",
            "$bInvert": "**[optional]** If True, the window is flashed from one state to the other. If False the window is returned to its original state.",
        ];

    "_WinAPI_FlashWindowEx" => "Flashes the specified window",
        "_WinAPI_FlashWindowEx ( $hWnd [, $iFlags = 3 [, $iCount = 3 [, $iTimeout = 0]]] )",
        [
            "$hWnd": "Handle to the window to be flashed. The window can be either opened or minimized.",
            "$iFlags": "**[optional]** The flash status. Can be one or more of the following values:\n    0 - Stop flashing. The system restores the window to its original state.\n    1 - Flash the window caption.\n    2 - Flash the taskbar button.\n    4 - Flash continuously until the function is called with the 0 flag.\n    8 - Flash continuously until the window comes to the foreground.",
            "$iCount": "**[optional]** The number of times to flash the window",
            "$iTimeout": "**[optional]** The rate at which the window is to be flashed, in milliseconds. If 0, the function uses the default cursor blink rate.",
        ];

    "_WinAPI_FlattenPath" => "Transforms any curves in the path that is selected into the current device context, turning each curve into a sequence of lines",
        "_WinAPI_FlattenPath ( $hDC )",
        [
            "$hDC": "Handle to a device context that contains a valid path",
        ];

    "_WinAPI_FloatToDWord" => "Converts a value of type FLOAT to a value of type DWORD",
        "_WinAPI_FloatToDWord ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_FloatToInt" => "Returns a 4 byte float as an integer value",
        "_WinAPI_FloatToInt ( $nFloat )",
        [
            "$nFloat": "Float value",
        ];

    "_WinAPI_FlushFileBuffers" => "Flushes the buffers of a specified file and causes all buffered data to be written to a file",
        "_WinAPI_FlushFileBuffers ( $hFile )",
        [
            "$hFile": "Handle to an open file. The file handle must have the GENERIC_WRITE access right.",
        ];

    "_WinAPI_FlushViewOfFile" => "Writes to the disk a byte range within a mapped view of a file",
        "_WinAPI_FlushViewOfFile ( $pAddress [, $iBytes = 0] )",
        [
            "$pAddress": "A pointer to the base address of the byte range to be flushed to the disk",
            "$iBytes": "**[optional]** The number of bytes to be flushed. If 0, the file is flushed from the base address to the end of the mapping.",
        ];

    "_WinAPI_FormatDriveDlg" => "Opens the Shell's Format dialog",
        "_WinAPI_FormatDriveDlg ( $sDrive [, $iOption = 0 [, $hParent = 0]] )",
        [
            "$sDrive": "The drive to format, in the format D:, E:, etc.",
            "$iOption": "**[optional]** The format options, $SHFMT_OPT_FULL or $SHFMT_OPT_SYSONLY",
            "$hParent": "**[optional]** Handle to the parent window of the dialog box",
        ];

    "_WinAPI_FormatMessage" => "Formats a message string",
        "_WinAPI_FormatMessage ( $iFlags, $pSource, $iMessageID, $iLanguageID, ByRef $pBuffer, $iSize, $vArguments )",
        [
            "$iFlags": "Contains a set of bit flags that specify aspects of the formatting process and how to interpret the $pSource parameter. The low-order byte of $iFlags specifies how the function handles line breaks in the output buffer.",
            "$pSource": "Pointer to message source",
            "$iMessageID": "Requested message identifier",
            "$iLanguageID": "Language identifier for requested message",
            "$pBuffer": "Pointer to message buffer or string",
            "$iSize": "Maximum size of message buffer",
            "$vArguments": "Address of array of message inserts",
        ];

    "_WinAPI_FrameRect" => "Draws a border around the specified rectangle by using the specified brush",
        "_WinAPI_FrameRect ( $hDC, $tRECT, $hBrush )",
        [
            "$hDC": "Handle to the device context in which the border is drawn",
            "$tRECT": "$tagRECT structure or pointer to it that contains the logical coordinates of the upper-left and lower-right corners of the rectangle",
            "$hBrush": "Handle to the brush used to draw the border",
        ];

    "_WinAPI_FrameRgn" => "Draws a border around the specified region by using the specified brush",
        "_WinAPI_FrameRgn ( $hDC, $hRgn, $hBrush, $iWidth, $iHeight )",
        [
            "$hDC": "Handle to the device context",
            "$hRgn": "Handle to the region to be enclosed in a border",
            "$hBrush": "Handle to the brush to be used to draw the border",
            "$iWidth": "The width, in logical units, of vertical brush strokes",
            "$iHeight": "The height, in logical units, of horizontal brush strokes",
        ];

    "_WinAPI_FreeLibrary" => "Decrements the reference count of the loaded dynamic-link library (DLL) module",
        "_WinAPI_FreeLibrary ( $hModule )",
        [
            "$hModule": "Identifies the loaded library module",
        ];

    "_WinAPI_FreeMemory" => "Frees a memory block in the internal library heap",
        "_WinAPI_FreeMemory ( $pMemory )",
        [
            "$pMemory": "A pointer to the memory block to be freed",
        ];

    "_WinAPI_FreeMRUList" => "Frees the handle associated with the most recently used (MRU) list and writes cached data to the registry",
        "_WinAPI_FreeMRUList ( $hMRU )",
        [
            "$hMRU": "Handle of the MRU list",
        ];

    "_WinAPI_FreeResource" => "Decrements the reference count of a loaded resource",
        "_WinAPI_FreeResource ( $hData )",
        [
            "$hData": "Handle of the resource",
        ];

    "_WinAPI_GdiComment" => "Copies a comment from a buffer into a specified enhanced-format metafile",
        "_WinAPI_GdiComment ( $hDC, $pBuffer, $iSize )",
        [
            "$hDC": "Handle to an enhanced-metafile device context",
            "$pBuffer": "Pointer to the buffer that contains the comment",
            "$iSize": "The length of the comment buffer, in bytes",
        ];

    "_WinAPI_GetActiveWindow" => "Retrieves the window handle to the active window attached to the calling thread's message queue",
        "_WinAPI_GetActiveWindow ( )",
        [];

    "_WinAPI_GetAllUsersProfileDirectory" => "Retrieves the path to the root of the directory that contains program data shared by all users",
        "_WinAPI_GetAllUsersProfileDirectory ( )",
        [];

    "_WinAPI_GetAncestor" => "Retrieves the handle to the ancestor of the specified window",
        "_WinAPI_GetAncestor ( $hWnd [, $iFlags = 1] )",
        [
            "$hWnd": "Handle to the window whose ancestor is to be retrieved. If this is the desktop window, the function returns 0.",
            "$iFlags": "**[optional]** Specifies the ancestor to be retrieved:\n    $GA_PARENT - Retrieves the parent window\n    $GA_ROOT - Retrieves the root window by walking the chain of parent windows\n    $GA_ROOTOWNER - Retrieves the owned root window by walking the chain of parent and owner windows returned by GetParent",
        ];

    "_WinAPI_GetApplicationRestartSettings" => "Retrieves the restart information registered for the specified process",
        "_WinAPI_GetApplicationRestartSettings ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetArcDirection" => "Retrieves the current arc direction for the specified device context",
        "_WinAPI_GetArcDirection ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetAsyncKeyState" => "Determines whether a key is up or down at the time the function is called",
        "_WinAPI_GetAsyncKeyState ( $iKey )",
        [
            "$iKey": "Key code to test",
        ];

    "_WinAPI_GetBinaryType" => "Determines whether a file is an executable (.exe) file, and if so, which subsystem runs the executable file",
        "_WinAPI_GetBinaryType ( $sFilePath )",
        [
            "$sFilePath": "The full path of the file whose executable type is to be determined",
        ];

    "_WinAPI_GetBitmapBits" => "Copies the bitmap bits of a specified device-dependent bitmap into a buffer",
        "_WinAPI_GetBitmapBits ( $hBitmap, $iSize, $pBits )",
        [
            "$hBitmap": "Handle to the device-dependent bitmap",
            "$iSize": "The number of bytes to copy from the bitmap into the buffer",
            "$pBits": "Pointer to a buffer to receive the bitmap bits",
        ];

    "_WinAPI_GetBitmapDimension" => "Retrieves a dimension of the specified bitmap",
        "_WinAPI_GetBitmapDimension ( $hBitmap )",
        [
            "$hBitmap": "Handle to the bitmap",
        ];

    "_WinAPI_GetBitmapDimensionEx" => "Retrieves the dimensions of a compatible bitmap set by _WinAPI_SetBitmapDimensionEx()",
        "_WinAPI_GetBitmapDimensionEx ( $hBitmap )",
        [
            "$hBitmap": "Handle to a compatible bitmap (DDB)",
        ];

    "_WinAPI_GetBkColor" => "Retrieves the current background color for the specified device context",
        "_WinAPI_GetBkColor ( $hDC )",
        [
            "$hDC": "Handle to the device context whose background color is to be returned",
        ];

    "_WinAPI_GetBkMode" => "Returns the current background mix mode of a specified device context",
        "_WinAPI_GetBkMode ( $hDC )",
        [
            "$hDC": "Handle to the device context whose background mode is to be returned",
        ];

    "_WinAPI_GetBoundsRect" => "Obtains the current accumulated bounding rectangle for a specified device context",
        "_WinAPI_GetBoundsRect ( $hDC [, $iFlags = 0] )",
        [
            "$hDC": "Handle to the device context whose bounding rectangle the function will return",
            "$iFlags": "**[optional]** Specifies whether to clear the bounding rectangle after returning it, 0 or $DCB_RESET",
        ];

    "_WinAPI_GetBrushOrg" => "Retrieves the current brush origin for the specified device context",
        "_WinAPI_GetBrushOrg ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetBValue" => "Retrieves an intensity value for the blue component of a 32-bit RGB value",
        "_WinAPI_GetBValue ( $iRGB )",
        [
            "$iRGB": "The color value",
        ];

    "_WinAPI_GetCapture" => "Retrieves a handle to the window that has captured the mouse",
        "_WinAPI_GetCapture ( )",
        [];

    "_WinAPI_GetCaretBlinkTime" => "Returns the time required to invert the caret's pixels",
        "_WinAPI_GetCaretBlinkTime ( )",
        [];

    "_WinAPI_GetCaretPos" => "Retrieves the caret's position",
        "_WinAPI_GetCaretPos ( )",
        [];

    "_WinAPI_GetCDType" => "Retrieves a type of the media which is loaded into a specified CD-ROM device",
        "_WinAPI_GetCDType ( $sDrive )",
        [
            "$sDrive": "The drive letter of the CD-ROM device, in the format D:, E:, etc.",
        ];

    "_WinAPI_GetClassInfoEx" => "Retrieves information about a window class",
        "_WinAPI_GetClassInfoEx ( $sClass [, $hInstance = 0] )",
        [
            "$sClass": "The class name or atom",
            "$hInstance": "**[optional]** Handle to the instance of the application that created the class",
        ];

    "_WinAPI_GetClassLongEx" => "Retrieves the specified value associated with the specified window class",
        "_WinAPI_GetClassLongEx ( $hWnd, $iIndex )",
        [
            "$hWnd": "Handle to the window",
            "$iIndex": "The value to retrieve, e.g. $GCL_HBRBACKGROUND, $GCL_HCURSOR, $GCL_HICON or $GCL_STYLE",
        ];

    "_WinAPI_GetClassName" => "Retrieves the name of the class to which the specified window belongs",
        "_WinAPI_GetClassName ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetClientHeight" => "Retrieves the height of a window's client area",
        "_WinAPI_GetClientHeight ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetClientRect" => "Retrieves the coordinates of a window's client area",
        "_WinAPI_GetClientRect ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetClientWidth" => "Retrieves the width of a window's client area",
        "_WinAPI_GetClientWidth ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetClipboardSequenceNumber" => "Retrieves the clipboard sequence number for the current window station",
        "_WinAPI_GetClipboardSequenceNumber ( )",
        [];

    "_WinAPI_GetClipBox" => "Retrieves the dimensions of the tightest bounding rectangle that can be drawn around the current visible area",
        "_WinAPI_GetClipBox ( $hDC, ByRef $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that receives the rectangle dimensions, in logical units",
        ];

    "_WinAPI_GetClipCursor" => "Retrieves the screen coordinates of the rectangular area to which the cursor is confined",
        "_WinAPI_GetClipCursor ( )",
        [];

    "_WinAPI_GetClipRgn" => "Retrieves a handle identifying the current application-defined clipping region for the specified device context",
        "_WinAPI_GetClipRgn ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetColorAdjustment" => "Retrieves the color adjustment values for the specified device context",
        "_WinAPI_GetColorAdjustment ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetCompressedFileSize" => "Retrieves the actual number of bytes of disk storage used to store a specified file",
        "_WinAPI_GetCompressedFileSize ( $sFilePath )",
        [
            "$sFilePath": "The name of the file",
        ];

    "_WinAPI_GetCompression" => "Retrieves the current compression state of a file or directory",
        "_WinAPI_GetCompression ( $sFilePath )",
        [
            "$sFilePath": "The name of the file or directory",
        ];

    "_WinAPI_GetComputerName" => "Retrieves the NetBIOS name of the local computer",
        "_WinAPI_GetComputerName ( )",
        [];

    "_WinAPI_GetComputerNameEx" => "Retrieves a NetBIOS or DNS name associated with the local computer",
        "_WinAPI_GetComputerNameEx ( $iFormat )",
        [
            "$iFormat": "The type of name to be retrieved, e.g. $COMPUTERNAMENETBIOS, $COMPUTERNAMEDNSHOSTNAME or $COMPUTERNAMEDNSFULLYQUALIFIED",
        ];

    "_WinAPI_GetConnectedDlg" => "Launches the Get Connected wizard within the calling application to enable network connectivity",
        "_WinAPI_GetConnectedDlg ( $iDlg [, $iFlags = 0 [, $hParent = 0]] )",
        [
            "$iDlg": "The type of wizard to show:\n    0 - Internet\n    1 - Wireless\n    2 - VPN",
            "$iFlags": "**[optional]** The flags that control the wizard, e.g. $GCDF_HIDEDEFAULT or $GCDF_HIDECLOSEBUTTON",
            "$hParent": "**[optional]** Handle to the parent window",
        ];

    "_WinAPI_GetCurrentDirectory" => "Retrieves the current directory for the current process",
        "_WinAPI_GetCurrentDirectory ( )",
        [];

    "_WinAPI_GetCurrentHwProfile" => "Retrieves information about the current hardware profile for the local computer",
        "_WinAPI_GetCurrentHwProfile ( )",
        [];

    "_WinAPI_GetCurrentObject" => "Retrieves a handle to an object of the specified type that has been selected into the specified device context",
        "_WinAPI_GetCurrentObject ( $hDC, $iType )",
        [
            "$hDC": "Handle to the device context",
            "$iType": "The object type to be queried, e.g. $OBJ_BITMAP, $OBJ_BRUSH, $OBJ_FONT, $OBJ_PAL or $OBJ_PEN",
        ];

    "_WinAPI_GetCurrentPosition" => "Retrieves the current position in logical coordinates",
        "_WinAPI_GetCurrentPosition ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetCurrentProcess" => "Returns the process handle of the calling process",
        "_WinAPI_GetCurrentProcess ( )",
        [];

    "_WinAPI_GetCurrentProcessExplicitAppUserModelID" => "Retrieves the application-defined, explicit Application User Model ID for the current process",
        "_WinAPI_GetCurrentProcessExplicitAppUserModelID ( )",
        [];

    "_WinAPI_GetCurrentProcessID" => "Returns the process identifier of the calling process",
        "_WinAPI_GetCurrentProcessID ( )",
        [];

    "_WinAPI_GetCurrentThemeName" => "Retrieves the name of the current visual style, and optionally retrieves the color scheme name and size name",
        "_WinAPI_GetCurrentThemeName ( )",
        [];

    "_WinAPI_GetCurrentThread" => "Retrieves a pseudo handle for the calling thread",
        "_WinAPI_GetCurrentThread ( )",
        [];

    "_WinAPI_GetCurrentThreadId" => "Returns the thread identifier of the calling thread",
        "_WinAPI_GetCurrentThreadId ( )",
        [];

    "_WinAPI_GetCursor" => "Retrieves a handle to the current cursor",
        "_WinAPI_GetCursor ( )",
        [];

    "_WinAPI_GetCursorInfo" => "Retrieves information about the global cursor",
        "_WinAPI_GetCursorInfo ( )",
        [];

    "_WinAPI_GetCursorPos" => "Retrieves the position of the mouse cursor, in screen coordinates",
        "_WinAPI_GetCursorPos ( )",
        [];

    "_WinAPI_GetDateFormat" => "Formats a date as a date string for a locale specified by the locale identifier",
        "_WinAPI_GetDateFormat ( [$iLCID = 0 [, $tSYSTEMTIME = 0 [, $iFlags = 0 [, $sFormat = '']]]] )",
        [
            "$iLCID": "**[optional]** The locale identifier (LCID). If 0, the user default locale is used.",
            "$tSYSTEMTIME": "**[optional]** $tagSYSTEMTIME structure that contains the date information to format. If 0, the current local system date is used.",
            "$iFlags": "**[optional]** The flags specifying date format options, e.g. $DATE_LONGDATE, $DATE_SHORTDATE or $DATE_YEARMONTH",
            "$sFormat": "**[optional]** The format picture string that is used to form the date, e.g. \"dd.MM.yyyy\"",
        ];

    "_WinAPI_GetDC" => "Retrieves a handle of a display device context for the client area a window",
        "_WinAPI_GetDC ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetDCEx" => "Retrieves a handle to a device context (DC) for the client area of a specified window or for the entire screen",
        "_WinAPI_GetDCEx ( $hWnd, $hRgn, $iFlags )",
        [
            "$hWnd": "Handle to the window whose DC is to be retrieved. If 0, the DC for the entire screen is retrieved.",
            "$hRgn": "A clipping region that may be combined with the visible region of the DC",
            "$iFlags": "The options for creating the DC, e.g. $DCX_WINDOW, $DCX_CACHE or $DCX_CLIPCHILDREN",
        ];

    "_WinAPI_GetDefaultPrinter" => "Retrieves the printer name of the default printer for the current user on the local computer",
        "_WinAPI_GetDefaultPrinter ( )",
        [];

    "_WinAPI_GetDefaultUserProfileDirectory" => "Retrieves the path to the root of the default user's profile",
        "_WinAPI_GetDefaultUserProfileDirectory ( )",
        [];

    "_WinAPI_GetDesktopWindow" => "Returns the handle of the Windows desktop window",
        "_WinAPI_GetDesktopWindow ( )",
        [];

    "_WinAPI_GetDeviceCaps" => "Retrieves device specific information about a specified device",
        "_WinAPI_GetDeviceCaps ( $hDC, $iIndex )",
        [
            "$hDC": "Identifies the device context",
            "$iIndex": "Specifies the item to return, e.g. $HORZRES, $VERTRES, $BITSPIXEL, $LOGPIXELSX or $LOGPIXELSY",
        ];

    "_WinAPI_GetDeviceDriverBaseName" => "Retrieves the base name of the specified device driver",
        "_WinAPI_GetDeviceDriverBaseName ( $pDriver )",
        [
            "$pDriver": "The load address of the device driver",
        ];

    "_WinAPI_GetDeviceDriverFileName" => "Retrieves the path available for the specified device driver",
        "_WinAPI_GetDeviceDriverFileName ( $pDriver )",
        [
            "$pDriver": "The load address of the device driver",
        ];

    "_WinAPI_GetDIBColorTable" => "Retrieves RGB color table from the DIB section bitmap",
        "_WinAPI_GetDIBColorTable ( $hBitmap )",
        [
            "$hBitmap": "Handle to the DIB section bitmap",
        ];

    "_WinAPI_GetDIBDimension" => "Retrieves a dimension of the specified device-independent bitmap (DIB)",
        "_WinAPI_GetDIBDimension ( $hBitmap )",
        [
            "$hBitmap": "Handle to the DIB",
        ];

    "_WinAPI_GetDIBits" => "Retrieves the bits of the specified bitmap and copies them into a buffer as a DIB",
        "_WinAPI_GetDIBits ( $hDC, $hBitmap, $iStartScan, $iScanLines, $pBits, $tBI, $iUsage )",
        [
            "$hDC": "Handle to the device context",
            "$hBitmap": "Handle to the bitmap. This must be a compatible bitmap (DDB).",
            "$iStartScan": "Specifies the first scan line to retrieve",
            "$iScanLines": "Specifies the number of scan lines to retrieve",
            "$pBits": "Pointer to a buffer to receive the bitmap data. If this parameter is 0, the function passes the dimensions and format of the bitmap to the $tagBITMAPINFO structure pointed to by the $tBI parameter.",
            "$tBI": "$tagBITMAPINFO structure or pointer to it that specifies the desired format for the DIB data",
            "$iUsage": "Specifies the format of the bmiColors member of the $tagBITMAPINFO structure:\n    $DIB_PAL_COLORS - The color table should consist of an array of 16-bit indexes into the current logical palette\n    $DIB_RGB_COLORS - The color table should consist of literal red, green, blue values",
        ];

    "_WinAPI_GetDiskFreeSpace" => "Retrieves information about the specified disk, including the amount of free space on the disk",
        "_WinAPI_GetDiskFreeSpace ( $sDrive )",
        [
            "$sDrive": "The root directory of the disk",
        ];

    "_WinAPI_GetDiskFreeSpaceEx" => "Retrieves information about the amount of space that is available on a disk volume",
        "_WinAPI_GetDiskFreeSpaceEx ( $sDrive )",
        [
            "$sDrive": "The directory on the disk",
        ];

    "_WinAPI_GetDlgCtrlID" => "Returns the identifier of the specified control",
        "_WinAPI_GetDlgCtrlID ( $hWnd )",
        [
            "$hWnd": "Handle to the control",
        ];

    "_WinAPI_GetDlgItem" => "Retrieves the handle of a control in the specified dialog box",
        "_WinAPI_GetDlgItem ( $hWnd, $iItemID )",
        [
            "$hWnd": "Handle to the dialog box that contains the control",
            "$iItemID": "Specifies the identifier of the control to be retrieved",
        ];

    "_WinAPI_GetDllDirectory" => "Retrieves the application-specific portion of the search path used to locate DLLs for the application",
        "_WinAPI_GetDllDirectory ( )",
        [];

    "_WinAPI_GetDoubleClickTime" => "Retrieves the current double-click time for the mouse",
        "_WinAPI_GetDoubleClickTime ( )",
        [];

    "_WinAPI_GetDriveBusType" => "Retrieves a bus type for the specified drive",
        "_WinAPI_GetDriveBusType ( $sDrive )",
        [
            "$sDrive": "The drive letter, in the format D:, E:, etc.",
        ];

    "_WinAPI_GetDriveGeometry" => "Retrieves information about the physical disk's geometry",
        "_WinAPI_GetDriveGeometry ( $iDrive )",
        [
            "$iDrive": "The physical drive number (0, 1, 2, etc)",
        ];

    "_WinAPI_GetDriveGeometryEx" => "Retrieves extended information about the disk's geometry",
        "_WinAPI_GetDriveGeometryEx ( $iDrive )",
        [
            "$iDrive": "The physical drive number (0, 1, 2, etc)",
        ];

    "_WinAPI_GetDriveNumber" => "Retrieves a device type, device number, and partition number for the specified drive",
        "_WinAPI_GetDriveNumber ( $sDrive )",
        [
            "$sDrive": "The drive letter, in the format D:, E:, etc.",
        ];

    "_WinAPI_GetDriveType" => "Determines whether a disk drive is a removable, fixed, CD-ROM, RAM disk, or network drive",
        "_WinAPI_GetDriveType ( [$sDrive = ''] )",
        [
            "$sDrive": "**[optional]** The root directory for the drive. If an empty string, the root of the current directory is used.",
        ];

    "_WinAPI_GetDurationFormat" => "Formats a duration of time as a time string for a locale specified by identifier",
        "_WinAPI_GetDurationFormat ( $iLCID, $iDuration [, $sFormat = ''] )",
        [
            "$iLCID": "The locale identifier (LCID)",
            "$iDuration": "The number of 100-nanosecond intervals in the duration, or a $tagSYSTEMTIME structure",
            "$sFormat": "**[optional]** The format string, e.g. \"hh:mm:ss\"",
        ];

    "_WinAPI_GetEnhMetaFile" => "Creates a handle that identifies the enhanced-format metafile stored in the specified file",
        "_WinAPI_GetEnhMetaFile ( $sFilePath )",
        [
            "$sFilePath": "The name of an enhanced metafile",
        ];

    "_WinAPI_GetEnhMetaFileBits" => "Retrieves the contents of the specified enhanced-format metafile",
        "_WinAPI_GetEnhMetaFileBits ( $hEmf, ByRef $pBuffer )",
        [
            "$hEmf": "Handle to the enhanced metafile",
            "$pBuffer": "Variable that receives a pointer to the memory buffer that holds the metafile data",
        ];

    "_WinAPI_GetEnhMetaFileDescription" => "Retrieves an optional text description from an enhanced-format metafile",
        "_WinAPI_GetEnhMetaFileDescription ( $hEmf )",
        [
            "$hEmf": "Handle to the enhanced metafile",
        ];

    "_WinAPI_GetEnhMetaFileDimension" => "Retrieves a dimension of the specified enhanced-format metafile",
        "_WinAPI_GetEnhMetaFileDimension ( $hEmf )",
        [
            "$hEmf": "Handle to the enhanced metafile",
        ];

    "_WinAPI_GetEnhMetaFileHeader" => "Retrieves the record containing the header for the specified enhanced-format metafile",
        "_WinAPI_GetEnhMetaFileHeader ( $hEmf )",
        [
            "$hEmf": "Handle to the enhanced metafile",
        ];

    "_WinAPI_GetErrorMessage" => "Retrieves a text of the specified system error code",
        "_WinAPI_GetErrorMessage ( $iCode [, $iLanguage = 0] )",
        [
            "$iCode": "The system error code",
            "$iLanguage": "**[optional]** The language identifier. If 0, the function searches in the usual language order.",
        ];

    "_WinAPI_GetErrorMode" => "Retrieves the error mode for the current process",
        "_WinAPI_GetErrorMode ( )",
        [];

    "_WinAPI_GetExitCodeProcess" => "Retrieves the termination status of the specified process",
        "_WinAPI_GetExitCodeProcess ( $hProcess )",
        [
            "$hProcess": "Handle to the process",
        ];

    "_WinAPI_GetExitCodeThread" => "Retrieves the termination status of the specified thread",
        "_WinAPI_GetExitCodeThread ( $hThread )",
        [
            "$hThread": "Handle to the thread",
        ];

    "_WinAPI_GetFileAttributes" => "Retrieves file system attributes for a specified file or directory",
        "_WinAPI_GetFileAttributes ( $sFilePath )",
        [
            "$sFilePath": "The name of the file or directory",
        ];

    "_WinAPI_GetFileID" => "Retrieves the file system's 8-byte file reference number for a file",
        "_WinAPI_GetFileID ( $hFile )",
        [
            "$hFile": "Handle to the file",
        ];

    "_WinAPI_GetFileInformationByHandle" => "Retrieves file information for the specified file",
        "_WinAPI_GetFileInformationByHandle ( $hFile )",
        [
            "$hFile": "Handle to the file",
        ];

    "_WinAPI_GetFileInformationByHandleEx" => "Retrieves complete information for the specified file",
        "_WinAPI_GetFileInformationByHandleEx ( $hFile )",
        [
            "$hFile": "Handle to the file",
        ];

    "_WinAPI_GetFilePointerEx" => "Retrieves the file pointer of the specified file",
        "_WinAPI_GetFilePointerEx ( $hFile )",
        [
            "$hFile": "Handle to the file",
        ];

    "_WinAPI_GetFileSize" => "Retrieves the size of the specified file",
        "_WinAPI_GetFileSize ( $hFile )",
        [
            "$hFile": "Handle to the file",
        ];

    "_WinAPI_GetFileSizeEx" => "Retrieves file size",
        "_WinAPI_GetFileSizeEx ( $hFile )",
        [
            "$hFile": "Handle to the file. The handle must have been created with either the $GENERIC_READ or $GENERIC_WRITE access right.",
        ];

    "_WinAPI_GetFileSizeOnDisk" => "Retrieves the actual number of bytes of disk storage used to store a specified file",
        "_WinAPI_GetFileSizeOnDisk ( $sFilePath )",
        [
            "$sFilePath": "The name of the file",
        ];

    "_WinAPI_GetFileTime" => "Retrieves the date and time that a file or directory was created, last accessed, and last modified",
        "_WinAPI_GetFileTime ( $hFile )",
        [
            "$hFile": "Handle to the file or directory",
        ];

    "_WinAPI_GetFileTitle" => "Retrieves the name of the specified file",
        "_WinAPI_GetFileTitle ( $sFilePath )",
        [
            "$sFilePath": "The name and location of a file",
        ];

    "_WinAPI_GetFileType" => "Retrieves the file type of the specified file",
        "_WinAPI_GetFileType ( $hFile )",
        [
            "$hFile": "Handle to the file",
        ];

    "_WinAPI_GetFileVersionInfo" => "Retrieves version information for the specified file",
        "_WinAPI_GetFileVersionInfo ( $sFilePath, ByRef $pBuffer [, $iFlags = 0] )",
        [
            "$sFilePath": "The name of the file",
            "$pBuffer": "A pointer to the buffer that receives the file version information",
            "$iFlags": "**[optional]** The flags that control the loading of the resource, e.g. $FILE_VER_GET_LOCALISED or $FILE_VER_GET_NEUTRAL",
        ];

    "_WinAPI_GetFinalPathNameByHandle" => "Retrieves the final path of the specified file",
        "_WinAPI_GetFinalPathNameByHandle ( $hFile )",
        [
            "$hFile": "Handle to a file or directory",
        ];

    "_WinAPI_GetFinalPathNameByHandleEx" => "Retrieves the final path of the specified file",
        "_WinAPI_GetFinalPathNameByHandleEx ( $hFile [, $iFlags = 0] )",
        [
            "$hFile": "Handle to a file or directory",
            "$iFlags": "**[optional]** The type of result to return, e.g. $FILE_NAME_NORMALIZED, $VOLUME_NAME_DOS or $VOLUME_NAME_GUID",
        ];

    "_WinAPI_GetFocus" => "Retrieves the handle of the window that has the keyboard focus",
        "_WinAPI_GetFocus ( )",
        [];

    "_WinAPI_GetFontMemoryResourceInfo" => "Retrieves the name of a font from a resource in memory",
        "_WinAPI_GetFontMemoryResourceInfo ( $pMemory [, $iFlag = 1] )",
        [
            "$pMemory": "Pointer to the font resource",
            "$iFlag": "**[optional]** The type of information to retrieve",
        ];

    "_WinAPI_GetFontName" => "Retrieves the unique name of the font based on its typeface name",
        "_WinAPI_GetFontName ( $sFaceName [, $iStyle = 0 [, $iCharSet = 1]] )",
        [
            "$sFaceName": "The typeface name of the font",
            "$iStyle": "**[optional]** The style of the font, e.g. $FS_BOLD or $FS_ITALIC",
            "$iCharSet": "**[optional]** The character set",
        ];

    "_WinAPI_GetFontResourceInfo" => "Retrieves the fontname from the specified font resource file",
        "_WinAPI_GetFontResourceInfo ( $sFont [, $bForce = False [, $iFlag = Default]] )",
        [
            "$sFont": "The name of the font resource file",
            "$bForce": "**[optional]** Specifies whether to add the font to the system font table before retrieving the name",
            "$iFlag": "**[optional]** The type of information to retrieve",
        ];

    "_WinAPI_GetForegroundWindow" => "Returns the handle of the foreground window",
        "_WinAPI_GetForegroundWindow ( )",
        [];

    "_WinAPI_GetFullPathName" => "Retrieves the full path and file name of the specified file",
        "_WinAPI_GetFullPathName ( $sFilePath )",
        [
            "$sFilePath": "The name of the file",
        ];

    "_WinAPI_GetGeoInfo" => "Retrieves information about a specified geographical location",
        "_WinAPI_GetGeoInfo ( $iGEOID, $iType [, $iLanguage = 0] )",
        [
            "$iGEOID": "The identifier for the geographical location",
            "$iType": "The type of information to retrieve, e.g. $GEO_NATION, $GEO_LATITUDE, $GEO_LONGITUDE, $GEO_ISO2, $GEO_ISO3 or $GEO_FRIENDLYNAME",
            "$iLanguage": "**[optional]** The language identifier",
        ];

    "_WinAPI_GetGlyphOutline" => "Retrieves the outline or bitmap for a character in the TrueType font that is selected into the specified device context",
        "_WinAPI_GetGlyphOutline ( $hDC, $sChar, $iFormat, ByRef $pBuffer [, $tMAT2 = 0] )",
        [
            "$hDC": "Handle to the device context",
            "$sChar": "The character for which data is to be returned",
            "$iFormat": "The format of the data that the function retrieves, e.g. $GGO_BEZIER, $GGO_BITMAP or $GGO_NATIVE",
            "$pBuffer": "Variable that receives a pointer to the buffer with the information about the outline or bitmap",
            "$tMAT2": "**[optional]** $tagMAT2 structure specifying a transformation matrix for the character",
        ];

    "_WinAPI_GetGraphicsMode" => "Retrieves the current graphics mode for the specified device context",
        "_WinAPI_GetGraphicsMode ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetGuiResources" => "Retrieves the count of handles to graphical user interface (GUI) objects in use by the specified process",
        "_WinAPI_GetGuiResources ( [$iFlag = 0 [, $hProcess = -1]] )",
        [
            "$iFlag": "**[optional]** The GUI object type:\n    0 - Return the count of GDI objects\n    1 - Return the count of USER objects",
            "$hProcess": "**[optional]** Handle to the process. Default (-1) is the current process.",
        ];

    "_WinAPI_GetGUIThreadInfo" => "Retrieves information about the active window or a specified GUI thread",
        "_WinAPI_GetGUIThreadInfo ( $iThreadId )",
        [
            "$iThreadId": "The identifier for the thread for which information is to be retrieved",
        ];

    "_WinAPI_GetGValue" => "Retrieves an intensity value for the green component of a 32-bit RGB value",
        "_WinAPI_GetGValue ( $iRGB )",
        [
            "$iRGB": "The color value",
        ];

    "_WinAPI_GetHandleInformation" => "Retrieves certain properties of an object handle",
        "_WinAPI_GetHandleInformation ( $hObject )",
        [
            "$hObject": "Handle to an object whose information is to be retrieved",
        ];

    "_WinAPI_GetHGlobalFromStream" => "Retrieves the global memory handle to a stream",
        "_WinAPI_GetHGlobalFromStream ( $pStream )",
        [
            "$pStream": "Pointer to the IStream interface on the stream object",
        ];

    "_WinAPI_GetIconDimension" => "Retrieves a dimension of the specified icon",
        "_WinAPI_GetIconDimension ( $hIcon )",
        [
            "$hIcon": "Handle to the icon",
        ];

    "_WinAPI_GetIconInfo" => "Retrieves information about the specified icon or cursor",
        "_WinAPI_GetIconInfo ( $hIcon )",
        [
            "$hIcon": "Handle to the icon or cursor. To retrieve information about a standard icon or cursor, specify one of the following values:\n    $IDC_APPSTARTING - Standard arrow and small hourglass cursor\n    $IDC_ARROW - Standard arrow cursor\n    $IDC_CROSS - Crosshair cursor\n    $IDC_HAND - Hand cursor\n    $IDC_HELP - Arrow and question mark cursor\n    $IDC_IBEAM - I-beam cursor\n    $IDC_NO - Slashed circle cursor\n    $IDC_SIZEALL - Four-pointed arrow cursor\n    $IDC_WAIT - Hourglass cursor",
        ];

    "_WinAPI_GetIconInfoEx" => "Retrieves information about the specified icon or cursor",
        "_WinAPI_GetIconInfoEx ( $hIcon )",
        [
            "$hIcon": "Handle to the icon or cursor",
        ];

    "_WinAPI_GetIdleTime" => "Retrieves the time (in milliseconds) since the last user input",
        "_WinAPI_GetIdleTime ( )",
        [];

    "_WinAPI_GetKeyboardLayout" => "Retrieves the active input locale identifier for the specified window",
        "_WinAPI_GetKeyboardLayout ( $hWnd )",
        [
            "$hWnd": "Handle to the window",
        ];

    "_WinAPI_GetKeyboardLayoutList" => "Retrieves the input locale identifiers corresponding to the current set of input locales in the system",
        "_WinAPI_GetKeyboardLayoutList ( )",
        [];

    "_WinAPI_GetKeyboardState" => "Copies the status of the 256 virtual keys to the specified buffer",
        "_WinAPI_GetKeyboardState ( )",
        [];

    "_WinAPI_GetKeyboardType" => "Retrieves information about the current keyboard",
        "_WinAPI_GetKeyboardType ( $iType )",
        [
            "$iType": "The type of keyboard information to be retrieved:\n    0 - Keyboard type\n    1 - Keyboard subtype\n    2 - The number of function keys on the keyboard",
        ];

    "_WinAPI_GetKeyNameText" => "Retrieves a string that represents the name of a key",
        "_WinAPI_GetKeyNameText ( $lParam )",
        [
            "$lParam": "The second parameter of the keyboard message (such as $WM_KEYDOWN) to be processed",
        ];

    "_WinAPI_GetKeyState" => "Retrieves the status of the specified virtual key",
        "_WinAPI_GetKeyState ( $iKey )",
        [
            "$iKey": "The virtual key code",
        ];

    "_WinAPI_GetLastActivePopup" => "Determines which pop-up window owned by the specified window was most recently active",
        "_WinAPI_GetLastActivePopup ( $hWnd )",
        [
            "$hWnd": "Handle to the owner window",
        ];

    "_WinAPI_GetLastError" => "Returns the calling thread's last-error code value",
        "_WinAPI_GetLastError ( [$iError = @error [, $iExtended = @extended]] )",
        [
            "$iError": "**[optional]** Sets the @error flag on return. Defaults to the @error value the function was called with.",
            "$iExtended": "**[optional]** Sets the @extended flag on return. Defaults to the @extended value the function was called with.",
        ];

    "_WinAPI_GetLastErrorMessage" => "Returns the calling thread's last-error code value as a message string",
        "_WinAPI_GetLastErrorMessage ( [$iError = @error [, $iExtended = @extended]] )",
        [
            "$iError": "**[optional]** Sets the @error flag on return. Defaults to the @error value the function was called with.",
            "$iExtended": "**[optional]** Sets the @extended flag on return. Defaults to the @extended value the function was called with.",
        ];

    "_WinAPI_GetLayeredWindowAttributes" => "Gets the layering color attributes of an existing layered window",
        "_WinAPI_GetLayeredWindowAttributes ( $hWnd, ByRef $iTransColor, ByRef $iTransGUI [, $bColorRef = False] )",
        [
            "$hWnd": "Handle to the layered window",
            "$iTransColor": "The transparency color key to be used when composing the layered window",
            "$iTransGUI": "The alpha value used to describe the opacity of the layered window",
            "$bColorRef": "**[optional]** Specifies whether $iTransColor is returned as a COLORREF",
        ];

    "_WinAPI_GetLocaleInfo" => "Retrieves information about a locale specified by identifier",
        "_WinAPI_GetLocaleInfo ( $iLCID, $iType )",
        [
            "$iLCID": "The locale identifier (LCID)",
            "$iType": "The locale information to retrieve, e.g. $LOCALE_SENGLANGUAGE, $LOCALE_SCOUNTRY, $LOCALE_SDECIMAL or $LOCALE_SSHORTDATE",
        ];

    "_WinAPI_GetLogicalDrives" => "Returns a bitmask representing the currently available disk drives",
        "_WinAPI_GetLogicalDrives ( )",
        [];

    "_WinAPI_GetLogicalDriveStrings" => "Retrieves the valid drives in the system as an array of root paths",
        "_WinAPI_GetLogicalDriveStrings ( )",
        [];

    "_WinAPI_GetLongPathName" => "Converts the specified path to its long form",
        "_WinAPI_GetLongPathName ( $sFilePath )",
        [
            "$sFilePath": "The path to be converted",
        ];

    "_WinAPI_GetMapMode" => "Retrieves the current mapping mode",
        "_WinAPI_GetMapMode ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetMemorySize" => "Retrieves the size of a memory block allocated from the internal library heap",
        "_WinAPI_GetMemorySize ( $pMemory )",
        [
            "$pMemory": "A pointer to the memory block whose size is to be obtained",
        ];

    "_WinAPI_GetMenu" => "Retrieves a handle to the menu assigned to the specified window",
        "_WinAPI_GetMenu ( $hWnd )",
        [
            "$hWnd": "Handle to the window whose menu handle is to be retrieved",
        ];

    "_WinAPI_GetMessageExtraInfo" => "Retrieves the extra message information for the current thread",
        "_WinAPI_GetMessageExtraInfo ( )",
        [];

    "_WinAPI_GetModuleFileNameEx" => "Retrieves the fully-qualified path for the file containing the specified module",
        "_WinAPI_GetModuleFileNameEx ( $hProcess [, $hModule = 0] )",
        [
            "$hProcess": "Handle to the process that contains the module",
            "$hModule": "**[optional]** Handle to the module. If 0, the path of the executable file of the process is returned.",
        ];

    "_WinAPI_GetModuleHandle" => "Returns a module handle for the specified module",
        "_WinAPI_GetModuleHandle ( $sModuleName )",
        [
            "$sModuleName": "Names a Win32 module (either a .DLL or .EXE file). If the filename extension is omitted, the default library extension .DLL is appended. If this parameter is 0, GetModuleHandle returns a handle of the file used to create the calling process.",
        ];

    "_WinAPI_GetModuleHandleEx" => "Retrieves a module handle for the specified module and increments the module's reference count",
        "_WinAPI_GetModuleHandleEx ( $sModule [, $iFlags = 0] )",
        [
            "$sModule": "The name of the loaded module, or an address in the module",
            "$iFlags": "**[optional]** The flags that define the behavior of the function, e.g. $GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS or $GET_MODULE_HANDLE_EX_FLAG_PIN",
        ];

    "_WinAPI_GetModuleInformation" => "Retrieves information about the specified module in the $tagMODULEINFO structure",
        "_WinAPI_GetModuleInformation ( $hProcess [, $hModule = 0] )",
        [
            "$hProcess": "Handle to the process that contains the module",
            "$hModule": "**[optional]** Handle to the module",
        ];

    "_WinAPI_GetMonitorInfo" => "Retrieves information about a display monitor",
        "_WinAPI_GetMonitorInfo ( $hMonitor )",
        [
            "$hMonitor": "Handle to the display monitor of interest",
        ];

    "_WinAPI_GetMousePos" => "Returns the current mouse position",
        "_WinAPI_GetMousePos ( [$bToClient = False [, $hWnd = 0]] )",
        [
            "$bToClient": "**[optional]** If True, the coordinates will be converted to client coordinates",
            "$hWnd": "**[optional]** Window handle used to convert coordinates if $bToClient is True",
        ];

    "_WinAPI_GetMousePosX" => "Returns the current mouse X position",
        "_WinAPI_GetMousePosX ( [$bToClient = False [, $hWnd = 0]] )",
        [
            "$bToClient": "**[optional]** If True, the coordinates will be converted to client coordinates",
            "$hWnd": "**[optional]** Window handle used to convert coordinates if $bToClient is True",
        ];

    "_WinAPI_GetMousePosY" => "Returns the current mouse Y position",
        "_WinAPI_GetMousePosY ( [$bToClient = False [, $hWnd = 0]] )",
        [
            "$bToClient": "**[optional]** If True, the coordinates will be converted to client coordinates",
            "$hWnd": "**[optional]** Window handle used to convert coordinates if $bToClient is True",
        ];

    "_WinAPI_GetMUILanguage" => "Retrieves the language currently in use by the common controls for a particular process",
        "_WinAPI_GetMUILanguage ( )",
        [];

    "_WinAPI_GetNextWindow" => "Retrieves a handle to the next or previous window in the Z-Order",
        "_WinAPI_GetNextWindow ( $hWnd [, $iCmd = 2] )",
        [
            "$hWnd": "Handle to a window",
            "$iCmd": "**[optional]** Indicates whether the function returns a handle to the next window or the previous window, $GW_HWNDNEXT or $GW_HWNDPREV",
        ];

    "_WinAPI_GetNumberFormat" => "Formats a number string as a number string customized for a locale specified by identifier",
        "_WinAPI_GetNumberFormat ( $iLCID, $sNumber [, $tNUMBERFMT = 0] )",
        [
            "$iLCID": "The locale identifier (LCID)",
            "$sNumber": "The number string to format",
            "$tNUMBERFMT": "**[optional]** $tagNUMBERFMT structure that contains number formatting information",
        ];

    "_WinAPI_GetObject" => "Retrieves information for the specified graphics object",
        "_WinAPI_GetObject ( $hObject, $iSize, $pObject )",
        [
            "$hObject": "Identifies a logical pen, brush, font, bitmap, region, or palette",
            "$iSize": "Specifies the number of bytes to be written to the buffer",
            "$pObject": "Pointer to a buffer that receives the information. The following shows the type of information the buffer receives for each type of graphics object:\n    HBITMAP - BITMAP or DIBSECTION\n    HPALETTE - A count of the number of entries in the logical palette\n    HPEN - EXTLOGPEN or LOGPEN\n    HBRUSH - LOGBRUSH\n    HFONT - LOGFONT",
        ];

    "_WinAPI_GetObjectID" => "Retrieves the object identifier for the specified file or directory",
        "_WinAPI_GetObjectID ( $sFilePath )",
        [
            "$sFilePath": "The path to the file or directory",
        ];

    "_WinAPI_GetObjectInfoByHandle" => "Retrieves information about a specified graphics object",
        "_WinAPI_GetObjectInfoByHandle ( $hObject )",
        [
            "$hObject": "Handle to the graphics object of interest",
        ];

    "_WinAPI_GetObjectNameByHandle" => "Retrieves the name of the kernel object by its handle",
        "_WinAPI_GetObjectNameByHandle ( $hObject )",
        [
            "$hObject": "Handle to the object",
        ];

    "_WinAPI_GetObjectType" => "Retrieves the type of the specified object",
        "_WinAPI_GetObjectType ( $hObject )",
        [
            "$hObject": "Handle to the graphics object",
        ];

    "_WinAPI_GetOpenFileName" => "Creates a dialog box that lets the user specify the drive, directory, and the name of a file or set of files to open",
        "_WinAPI_GetOpenFileName ( [$sTitle = \"\" [, $sFilter = \"All files (*.*)\" [, $sInitalDir = \".\" [, $sDefaultFile = \"\" [, $sDefaultExt = \"\" [, $iFilterIndex = 1 [, $iFlags = 0 [, $iFlagsEx = 0 [, $hWndOwner = 0]]]]]]]]] )",
        [
            "$sTitle": "**[optional]** String to be placed in the title bar of the dialog box",
            "$sFilter": "**[optional]** Pairs of filter strings, e.g. \"Text (*.txt)|All files (*.*)\"",
            "$sInitalDir": "**[optional]** String that can specify the initial directory",
            "$sDefaultFile": "**[optional]** A file name used to initialize the File Name edit control",
            "$sDefaultExt": "**[optional]** String that contains the default extension",
            "$iFilterIndex": "**[optional]** Specifies the index of the currently selected filter in the File Types control",
            "$iFlags": "**[optional]** A set of bit flags you can use to initialize the dialog box, e.g. $OFN_ALLOWMULTISELECT, $OFN_FILEMUSTEXIST or $OFN_PATHMUSTEXIST",
            "$iFlagsEx": "**[optional]** A set of bit flags you can use to initialize the dialog box, e.g. $OFN_EX_NOPLACESBAR",
            "$hWndOwner": "**[optional]** Handle to the window that owns the dialog box",
        ];

    "_WinAPI_GetOutlineTextMetrics" => "Retrieves text metrics for TrueType fonts",
        "_WinAPI_GetOutlineTextMetrics ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetOverlappedResult" => "Retrieves the results of an overlapped operation",
        "_WinAPI_GetOverlappedResult ( $hFile, $tOverlapped, ByRef $iBytes [, $bWait = False] )",
        [
            "$hFile": "Handle to the file, named pipe, or communications device",
            "$tOverlapped": "a $tagOVERLAPPED structure or a pointer to it that was specified when the overlapped operation was started",
            "$iBytes": "The number of bytes that were actually transferred by a read or write operation",
            "$bWait": "**[optional]** If True, the function does not return until the operation has been completed. If False and the operation is still pending, the function returns False and the _WinAPI_GetLastError function returns $ERROR_IO_INCOMPLETE.",
        ];

    "_WinAPI_GetParent" => "Retrieves the handle of the specified child window's parent window",
        "_WinAPI_GetParent ( $hWnd )",
        [
            "$hWnd": "Window handle of child window",
        ];

    "_WinAPI_GetParentProcess" => "Retrieves the PID of the parent process for the specified process",
        "_WinAPI_GetParentProcess ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetPEType" => "Retrieves a type of the machine for the specified portable executable (PE)",
        "_WinAPI_GetPEType ( $sFilePath )",
        [
            "$sFilePath": "The path to the PE file",
        ];

    "_WinAPI_GetPhysicallyInstalledSystemMemory" => "Retrieves the amount of RAM that is physically installed on the computer",
        "_WinAPI_GetPhysicallyInstalledSystemMemory ( )",
        [];

    "_WinAPI_GetPixel" => "Retrieves the red, green, blue (RGB) color value of the pixel at the specified coordinates",
        "_WinAPI_GetPixel ( $hDC, $iX, $iY )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in logical units, of the pixel to be examined",
            "$iY": "The y-coordinate, in logical units, of the pixel to be examined",
        ];

    "_WinAPI_GetPolyFillMode" => "Retrieves the current polygon fill mode",
        "_WinAPI_GetPolyFillMode ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetPosFromRect" => "Interprets the coordinates of the rectangle as offset and position and returns them",
        "_WinAPI_GetPosFromRect ( $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
        ];

    "_WinAPI_GetPriorityClass" => "Retrieves the priority class for the specified process",
        "_WinAPI_GetPriorityClass ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcAddress" => "Retrieves the address of an exported function or variable from the specified module",
        "_WinAPI_GetProcAddress ( $hModule, $vName )",
        [
            "$hModule": "A handle to the DLL module that contains the function or variable",
            "$vName": "The function or variable name, or the function's ordinal value",
        ];

    "_WinAPI_GetProcessAffinityMask" => "Obtains the affinity masks for the process and the system",
        "_WinAPI_GetProcessAffinityMask ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessCommandLine" => "Retrieves the command-line string for the specified process",
        "_WinAPI_GetProcessCommandLine ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessFileName" => "Retrieves the fully-qualified path of the executable file for the specified process",
        "_WinAPI_GetProcessFileName ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessHandleCount" => "Retrieves the number of open handles that belong to the specified process",
        "_WinAPI_GetProcessHandleCount ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessID" => "Retrieves the process identifier of the specified process",
        "_WinAPI_GetProcessID ( $hProcess )",
        [
            "$hProcess": "Handle to the process",
        ];

    "_WinAPI_GetProcessIoCounters" => "Retrieves accounting information for all I/O operations performed by the specified process",
        "_WinAPI_GetProcessIoCounters ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessMemoryInfo" => "Retrieves information about the memory usage of the specified process",
        "_WinAPI_GetProcessMemoryInfo ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessName" => "Retrieves the name for the specified process",
        "_WinAPI_GetProcessName ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessShutdownParameters" => "Retrieves the shutdown parameters for the currently calling process",
        "_WinAPI_GetProcessShutdownParameters ( )",
        [];

    "_WinAPI_GetProcessTimes" => "Retrieves timing information for the specified process",
        "_WinAPI_GetProcessTimes ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessUser" => "Retrieves the user and domain name for the specified process",
        "_WinAPI_GetProcessUser ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProcessWindowStation" => "Retrieves a handle to the current window station for the calling process",
        "_WinAPI_GetProcessWindowStation ( )",
        [];

    "_WinAPI_GetProcessWorkingDirectory" => "Retrieves the current working directory for the specified process",
        "_WinAPI_GetProcessWorkingDirectory ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_GetProfilesDirectory" => "Retrieves the path to the root directory where user profiles are stored",
        "_WinAPI_GetProfilesDirectory ( )",
        [];

    "_WinAPI_GetProp" => "Retrieves a data handle from the property list of the specified window",
        "_WinAPI_GetProp ( $hWnd, $sProp )",
        [
            "$hWnd": "Handle to the window whose property list is to be searched",
            "$sProp": "The property name",
        ];

    "_WinAPI_GetPwrCapabilities" => "Retrieves information about the system power capabilities",
        "_WinAPI_GetPwrCapabilities ( [$iIndex = -1] )",
        [
            "$iIndex": "**[optional]** The index of the capability to retrieve. If -1, all capabilities are returned as an array.",
        ];

    "_WinAPI_GetRawInputBuffer" => "Performs a buffered read of the raw input data",
        "_WinAPI_GetRawInputBuffer ( $pBuffer, $iLength )",
        [
            "$pBuffer": "A pointer to a buffer of $tagRAWINPUT structures that contain the raw input data",
            "$iLength": "The size of the buffer, in bytes",
        ];

    "_WinAPI_GetRawInputBufferLength" => "Retrieves the required size of the buffer to perform a buffered read of the raw input data",
        "_WinAPI_GetRawInputBufferLength ( )",
        [];

    "_WinAPI_GetRawInputData" => "Retrieves the raw input from the specified device",
        "_WinAPI_GetRawInputData ( $hRawInput, $pBuffer, $iLength, $iFlag )",
        [
            "$hRawInput": "Handle to the $tagRAWINPUT structure, from the $lParam in $WM_INPUT",
            "$pBuffer": "A pointer to the data that comes from the $tagRAWINPUT structure",
            "$iLength": "The size of the buffer, in bytes",
            "$iFlag": "The command flag, $RID_HEADER or $RID_INPUT",
        ];

    "_WinAPI_GetRawInputDeviceInfo" => "Retrieves information about the raw input device",
        "_WinAPI_GetRawInputDeviceInfo ( $hDevice, $pBuffer, $iLength, $iFlag )",
        [
            "$hDevice": "Handle to the raw input device",
            "$pBuffer": "A pointer to a buffer that contains the information specified by $iFlag",
            "$iLength": "The size of the buffer, in bytes",
            "$iFlag": "The type of data to return, $RIDI_DEVICENAME, $RIDI_DEVICEINFO or $RIDI_PREPARSEDDATA",
        ];

    "_WinAPI_GetRegionData" => "Fills the specified buffer with data describing a region",
        "_WinAPI_GetRegionData ( $hRgn, ByRef $tRGNDATA )",
        [
            "$hRgn": "Handle to the region",
            "$tRGNDATA": "$tagRGNDATAHEADER structure, followed by an array of $tagRECT, that receives the information",
        ];

    "_WinAPI_GetRegisteredRawInputDevices" => "Retrieves the information about the raw input devices for the current application",
        "_WinAPI_GetRegisteredRawInputDevices ( ByRef $pBuffer )",
        [
            "$pBuffer": "A pointer to a buffer that receives an array of $tagRAWINPUTDEVICE structures",
        ];

    "_WinAPI_GetRegKeyNameByHandle" => "Retrieves a name of the registry key by using its handle",
        "_WinAPI_GetRegKeyNameByHandle ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_GetRgnBox" => "Retrieves the bounding rectangle of the specified region",
        "_WinAPI_GetRgnBox ( $hRgn, ByRef $tRECT )",
        [
            "$hRgn": "Handle to the region",
            "$tRECT": "$tagRECT structure that receives the bounding rectangle in logical units",
        ];

    "_WinAPI_GetROP2" => "Retrieves the foreground mix mode of the specified device context",
        "_WinAPI_GetROP2 ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetRValue" => "Retrieves an intensity value for the red component of a 32-bit RGB value",
        "_WinAPI_GetRValue ( $iRGB )",
        [
            "$iRGB": "The color value",
        ];

    "_WinAPI_GetSaveFileName" => "Creates a dialog box that lets the user specify the drive, directory, and name of a file to save",
        "_WinAPI_GetSaveFileName ( [$sTitle = \"\" [, $sFilter = \"All files (*.*)\" [, $sInitalDir = \".\" [, $sDefaultFile = \"\" [, $sDefaultExt = \"\" [, $iFilterIndex = 1 [, $iFlags = 0 [, $iFlagsEx = 0 [, $hWndOwner = 0]]]]]]]]] )",
        [
            "$sTitle": "**[optional]** String to be placed in the title bar of the dialog box",
            "$sFilter": "**[optional]** Pairs of filter strings, e.g. \"Text (*.txt)|All files (*.*)\"",
            "$sInitalDir": "**[optional]** String that can specify the initial directory",
            "$sDefaultFile": "**[optional]** A file name used to initialize the File Name edit control",
            "$sDefaultExt": "**[optional]** String that contains the default extension",
            "$iFilterIndex": "**[optional]** Specifies the index of the currently selected filter in the File Types control",
            "$iFlags": "**[optional]** A set of bit flags you can use to initialize the dialog box, e.g. $OFN_OVERWRITEPROMPT or $OFN_PATHMUSTEXIST",
            "$iFlagsEx": "**[optional]** A set of bit flags you can use to initialize the dialog box",
            "$hWndOwner": "**[optional]** Handle to the window that owns the dialog box",
        ];

    "_WinAPI_GetShellWindow" => "Returns a handle to the Shell's desktop window",
        "_WinAPI_GetShellWindow ( )",
        [];

    "_WinAPI_GetShortPathName" => "Retrieves the short path form of the specified path",
        "_WinAPI_GetShortPathName ( $sFilePath )",
        [
            "$sFilePath": "The path string",
        ];

    "_WinAPI_GetStartupInfo" => "Retrieves the contents of the $tagSTARTUPINFO structure that was specified when the calling process was created",
        "_WinAPI_GetStartupInfo ( )",
        [];

    "_WinAPI_GetStdHandle" => "Retrieves a handle for the standard input, standard output, or standard error device",
        "_WinAPI_GetStdHandle ( $iStdHandle )",
        [
            "$iStdHandle": "Standard device for which a handle is to be returned:\n    0 - Handle to the standard input device\n    1 - Handle to the standard output device\n    2 - Handle to the standard error device",
        ];

    "_WinAPI_GetStockObject" => "Retrieves a handle to one of the predefined stock pens, brushes, fonts, or palettes",
        "_WinAPI_GetStockObject ( $iObject )",
        [
            "$iObject": "Specifies the type of stock object, e.g. $BLACK_BRUSH, $DKGRAY_BRUSH, $GRAY_BRUSH, $HOLLOW_BRUSH, $NULL_BRUSH, $WHITE_BRUSH, $BLACK_PEN, $NULL_PEN, $WHITE_PEN, $ANSI_FIXED_FONT, $DEFAULT_GUI_FONT or $SYSTEM_FONT",
        ];

    "_WinAPI_GetStretchBltMode" => "Retrieves the current stretching mode",
        "_WinAPI_GetStretchBltMode ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetString" => "Returns a string located at the specified memory address",
        "_WinAPI_GetString ( $pString [, $bUnicode = True] )",
        [
            "$pString": "Pointer to a null-terminated string",
            "$bUnicode": "**[optional]** Specifies whether the string is Unicode:\n    True - The string is Unicode (default)\n    False - The string is ANSI",
        ];

    "_WinAPI_GetSysColor" => "Retrieves the current color of the specified display element",
        "_WinAPI_GetSysColor ( $iIndex )",
        [
            "$iIndex": "The display element whose color is to be retrieved, e.g. $COLOR_3DFACE, $COLOR_ACTIVECAPTION, $COLOR_BTNTEXT, $COLOR_DESKTOP, $COLOR_HIGHLIGHT, $COLOR_WINDOW or $COLOR_WINDOWTEXT",
        ];

    "_WinAPI_GetSysColorBrush" => "Retrieves a handle identifying a logical brush that corresponds to the specified color index",
        "_WinAPI_GetSysColorBrush ( $iIndex )",
        [
            "$iIndex": "The display element whose color is to be retrieved. See _WinAPI_GetSysColor for the list of values.",
        ];

    "_WinAPI_GetSystemDefaultLangID" => "Returns the language identifier for the system locale",
        "_WinAPI_GetSystemDefaultLangID ( )",
        [];

    "_WinAPI_GetSystemDefaultLCID" => "Returns the locale identifier for the system locale",
        "_WinAPI_GetSystemDefaultLCID ( )",
        [];

    "_WinAPI_GetSystemDefaultUILanguage" => "Retrieves the language identifier for the system default UI language of the operating system",
        "_WinAPI_GetSystemDefaultUILanguage ( )",
        [];

    "_WinAPI_GetSystemDEPPolicy" => "Gets the data execution prevention (DEP) policy setting for the system",
        "_WinAPI_GetSystemDEPPolicy ( )",
        [];

    "_WinAPI_GetSystemDirectory" => "Retrieves the path of the system directory",
        "_WinAPI_GetSystemDirectory ( )",
        [];

    "_WinAPI_GetSystemInfo" => "Retrieves information about the current system",
        "_WinAPI_GetSystemInfo ( )",
        [];

    "_WinAPI_GetSystemMenu" => "Enables the application to access the window menu for copying and modifying",
        "_WinAPI_GetSystemMenu ( $hWnd, $bRevert )",
        [
            "$hWnd": "Handle to the window that will own a copy of the window menu",
            "$bRevert": "Specifies whether to reset the window menu back to the default state",
        ];

    "_WinAPI_GetSystemMetrics" => "Retrieves the specified system metric or system configuration setting",
        "_WinAPI_GetSystemMetrics ( $iIndex )",
        [
            "$iIndex": "The system metric or configuration setting to be retrieved, e.g. $SM_CXSCREEN, $SM_CYSCREEN, $SM_CXICON, $SM_CYICON, $SM_CMONITORS or $SM_REMOTESESSION",
        ];

    "_WinAPI_GetSystemPowerStatus" => "Retrieves the power status of the system",
        "_WinAPI_GetSystemPowerStatus ( )",
        [];

    "_WinAPI_GetSystemTimes" => "Retrieves system timing information",
        "_WinAPI_GetSystemTimes ( )",
        [];

    "_WinAPI_GetSystemWow64Directory" => "Retrieves the path of the system directory used by WOW64",
        "_WinAPI_GetSystemWow64Directory ( )",
        [];

    "_WinAPI_GetTabbedTextExtent" => "Computes the width and height of a character string which may contain one or more tab characters",
        "_WinAPI_GetTabbedTextExtent ( $hDC, $sText [, $aTab = 0 [, $iStart = 0 [, $iEnd = -1]]] )",
        [
            "$hDC": "Handle to the device context",
            "$sText": "The character string",
            "$aTab": "**[optional]** The array containing the tab-stop positions, in device units",
            "$iStart": "**[optional]** The index of array to start at",
            "$iEnd": "**[optional]** The index of array to stop at",
        ];

    "_WinAPI_GetTempFileName" => "Creates a name for a temporary file",
        "_WinAPI_GetTempFileName ( $sFilePath [, $sPrefix = ''] )",
        [
            "$sFilePath": "The directory path for the file name",
            "$sPrefix": "**[optional]** The prefix string. Only the first three characters are used.",
        ];

    "_WinAPI_GetTextAlign" => "Retrieves the text-alignment setting for the specified device context",
        "_WinAPI_GetTextAlign ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetTextCharacterExtra" => "Retrieves the current intercharacter spacing for the specified device context",
        "_WinAPI_GetTextCharacterExtra ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetTextColor" => "Retrieves the current text color for the specified device context",
        "_WinAPI_GetTextColor ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetTextExtentPoint32" => "Computes the width and height of the specified string of text",
        "_WinAPI_GetTextExtentPoint32 ( $hDC, $sText )",
        [
            "$hDC": "Identifies the device context",
            "$sText": "String of text",
        ];

    "_WinAPI_GetTextFace" => "Retrieves the typeface name of the font that is selected into the specified device context",
        "_WinAPI_GetTextFace ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetTextMetrics" => "Retrieves basic information for the currently selected font",
        "_WinAPI_GetTextMetrics ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetThemeAppProperties" => "Retrieves the property flags that control how visual styles are applied in the current application",
        "_WinAPI_GetThemeAppProperties ( )",
        [];

    "_WinAPI_GetThemeColor" => "Retrieves the value of a color property",
        "_WinAPI_GetThemeColor ( $hTheme, $sClass, $iPartID, $iStateID, $iPropID )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$sClass": "The class name of the theme",
            "$iPartID": "The part that contains the color property",
            "$iStateID": "The state of the part",
            "$iPropID": "The property to retrieve, e.g. $TMT_BORDERCOLOR or $TMT_TEXTCOLOR",
        ];

    "_WinAPI_GetThemeFont" => "Retrieves the value of a font property",
        "_WinAPI_GetThemeFont ( $hTheme, $iPartID, $iStateID, $iPropID [, $hDC = 0] )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The part that contains the font property",
            "$iStateID": "The state of the part",
            "$iPropID": "The property to retrieve, e.g. $TMT_GLYPHFONT",
            "$hDC": "**[optional]** Handle to the device context",
        ];

    "_WinAPI_GetThemeSysColor" => "Retrieves the value of a system color",
        "_WinAPI_GetThemeSysColor ( $hTheme, $iColorID )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iColorID": "The system color index, e.g. $COLOR_BTNFACE or $COLOR_WINDOW",
        ];

    "_WinAPI_GetThreadDesktop" => "Retrieves a handle to the desktop assigned to the specified thread",
        "_WinAPI_GetThreadDesktop ( $iThreadId )",
        [
            "$iThreadId": "The thread identifier",
        ];

    "_WinAPI_GetThreadErrorMode" => "Retrieves the error mode for the calling thread",
        "_WinAPI_GetThreadErrorMode ( )",
        [];

    "_WinAPI_GetThreadLocale" => "Returns the locale identifier of the current locale for the calling thread",
        "_WinAPI_GetThreadLocale ( )",
        [];

    "_WinAPI_GetThreadPriority" => "Retrieves the priority value for the specified thread",
        "_WinAPI_GetThreadPriority ( $hThread )",
        [
            "$hThread": "Handle to the thread",
        ];

    "_WinAPI_GetThreadUILanguage" => "Returns the language identifier of the first user interface language for the current thread",
        "_WinAPI_GetThreadUILanguage ( )",
        [];

    "_WinAPI_GetTickCount" => "Retrieves the number of milliseconds that have elapsed since the system was started",
        "_WinAPI_GetTickCount ( )",
        [];

    "_WinAPI_GetTickCount64" => "Retrieves the number of milliseconds that have elapsed since the system was started, as a 64-bit value",
        "_WinAPI_GetTickCount64 ( )",
        [];

    "_WinAPI_GetTimeFormat" => "Formats time as a time string for a locale specified by identifier",
        "_WinAPI_GetTimeFormat ( [$iLCID = 0 [, $tSYSTEMTIME = 0 [, $iFlags = 0 [, $sFormat = '']]]] )",
        [
            "$iLCID": "**[optional]** The locale identifier (LCID). If 0, the user default locale is used.",
            "$tSYSTEMTIME": "**[optional]** $tagSYSTEMTIME structure that contains the time information to format. If 0, the current local system time is used.",
            "$iFlags": "**[optional]** The time format options, e.g. $TIME_NOMINUTESORSECONDS, $TIME_NOSECONDS, $TIME_NOTIMEMARKER or $TIME_FORCE24HOURFORMAT",
            "$sFormat": "**[optional]** The format picture string, e.g. \"hh:mm:ss tt\"",
        ];

    "_WinAPI_GetTokenInformation" => "Retrieves a specified type of information about an access token",
        "_WinAPI_GetTokenInformation ( $hToken, $iClass )",
        [
            "$hToken": "Handle to an access token from which information is retrieved",
            "$iClass": "The type of information to retrieve, e.g. $TOKENUSER, $TOKENGROUPS, $TOKENPRIVILEGES or $TOKENELEVATION",
        ];

    "_WinAPI_GetTopWindow" => "Examines the Z order of the child windows associated with the specified parent window and retrieves a handle to the child window at the top of the Z order",
        "_WinAPI_GetTopWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the parent window whose child windows are to be examined. If 0, the function returns a handle to the window at the top of the Z order.",
        ];

    "_WinAPI_GetUpdateRect" => "Retrieves the coordinates of the smallest rectangle that completely encloses the update region of the specified window",
        "_WinAPI_GetUpdateRect ( $hWnd [, $bErase = True] )",
        [
            "$hWnd": "Handle to the window whose update region is to be retrieved",
            "$bErase": "**[optional]** Specifies whether the background in the update region is to be erased",
        ];

    "_WinAPI_GetUpdateRgn" => "Retrieves the update region of a window by copying it into the specified region",
        "_WinAPI_GetUpdateRgn ( $hWnd, $hRgn [, $bErase = False] )",
        [
            "$hWnd": "Handle to the window with an update region that is to be retrieved",
            "$hRgn": "Handle to the region to receive the update region",
            "$bErase": "**[optional]** Specifies whether the window background should be erased and nonclient areas of child windows redrawn",
        ];

    "_WinAPI_GetUserDefaultLangID" => "Returns the language identifier of the Region Format setting for the current user",
        "_WinAPI_GetUserDefaultLangID ( )",
        [];

    "_WinAPI_GetUserDefaultLCID" => "Returns the locale identifier for the user default locale",
        "_WinAPI_GetUserDefaultLCID ( )",
        [];

    "_WinAPI_GetUserDefaultUILanguage" => "Returns the language identifier for the user UI language for the current user",
        "_WinAPI_GetUserDefaultUILanguage ( )",
        [];

    "_WinAPI_GetUserGeoID" => "Retrieves information about the geographical location of the user",
        "_WinAPI_GetUserGeoID ( )",
        [];

    "_WinAPI_GetUserName" => "Retrieves the name of the user associated with the current thread",
        "_WinAPI_GetUserName ( )",
        [];

    "_WinAPI_GetUserObjectInformation" => "Retrieves information about the specified window station or desktop object",
        "_WinAPI_GetUserObjectInformation ( $hObject, $iIndex )",
        [
            "$hObject": "Handle to the window station or desktop object",
            "$iIndex": "The information to be retrieved, e.g. $UOI_FLAGS, $UOI_HEAPSIZE, $UOI_IO, $UOI_NAME, $UOI_TYPE or $UOI_USER_SID",
        ];

    "_WinAPI_GetUserProfileDirectory" => "Retrieves the path to the root directory of the current user's profile",
        "_WinAPI_GetUserProfileDirectory ( )",
        [];

    "_WinAPI_GetVersion" => "Retrieves version number of the current operating system",
        "_WinAPI_GetVersion ( )",
        [];

    "_WinAPI_GetVersionEx" => "Retrieves information about the current operating system",
        "_WinAPI_GetVersionEx ( )",
        [];

    "_WinAPI_GetVolumeInformation" => "Retrieves information about the file system and volume associated with the specified root directory",
        "_WinAPI_GetVolumeInformation ( [$sRoot = ''] )",
        [
            "$sRoot": "**[optional]** The root directory of the volume to be described. If an empty string, the root of the current directory is used.",
        ];

    "_WinAPI_GetVolumeInformationByHandle" => "Retrieves information about the file system and volume associated with the specified file",
        "_WinAPI_GetVolumeInformationByHandle ( $hFile )",
        [
            "$hFile": "Handle to a file on the volume",
        ];

    "_WinAPI_GetVolumeNameForVolumeMountPoint" => "Retrieves a volume GUID path for the volume that is associated with the specified volume mount point",
        "_WinAPI_GetVolumeNameForVolumeMountPoint ( $sMountedPath )",
        [
            "$sMountedPath": "The path of a mounted folder or a drive letter, e.g. \"X:\\\" or \"Y:\\MountX\\\"",
        ];

    "_WinAPI_GetVolumePathName" => "Retrieves the volume mount point where the specified path is mounted",
        "_WinAPI_GetVolumePathName ( $sFilePath )",
        [
            "$sFilePath": "The input path string",
        ];

    "_WinAPI_GetWindow" => "Retrieves the handle of a window that has a specified relationship to the specified window",
        "_WinAPI_GetWindow ( $hWnd, $iCmd )",
        [
            "$hWnd": "Handle of the window",
            "$iCmd": "Specifies the relationship between the specified window and the window whose handle is to be retrieved:\n    $GW_CHILD - The retrieved handle identifies the child window at the top of the Z order\n    $GW_HWNDFIRST - Returns a handle to the window of the same type that is highest in the Z order\n    $GW_HWNDLAST - Returns a handle to the window of the same type that is lowest in the Z order\n    $GW_HWNDNEXT - Returns a handle to the window below the given window\n    $GW_HWNDPREV - Returns a handle to the window above the given window\n    $GW_OWNER - Returns a handle to the specified window's owner window",
        ];

    "_WinAPI_GetWindowDC" => "Retrieves the device context (DC) for the entire window",
        "_WinAPI_GetWindowDC ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetWindowDisplayAffinity" => "Retrieves the current display affinity setting, from any process, for a given window",
        "_WinAPI_GetWindowDisplayAffinity ( $hWnd )",
        [
            "$hWnd": "Handle to the window",
        ];

    "_WinAPI_GetWindowExt" => "Retrieves the x-extent and y-extent of the window for the specified device context",
        "_WinAPI_GetWindowExt ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetWindowFileName" => "Retrieves the fully-qualified path of the module associated with the specified window handle",
        "_WinAPI_GetWindowFileName ( $hWnd )",
        [
            "$hWnd": "Handle to the window whose module file name is retrieved",
        ];

    "_WinAPI_GetWindowHeight" => "Returns the height of the window",
        "_WinAPI_GetWindowHeight ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_GetWindowInfo" => "Retrieves information about the specified window",
        "_WinAPI_GetWindowInfo ( $hWnd )",
        [
            "$hWnd": "Handle to the window whose information is to be retrieved",
        ];

    "_WinAPI_GetWindowLong" => "Retrieves information about the specified window",
        "_WinAPI_GetWindowLong ( $hWnd, $iIndex )",
        [
            "$hWnd": "Handle of the window",
            "$iIndex": "Specifies the zero based offset to the value to be retrieved:\n    $GWL_EXSTYLE - Retrieves the extended window styles\n    $GWL_HINSTANCE - Retrieves a handle to the application instance\n    $GWL_HWNDPARENT - Retrieves a handle to the parent window, if any\n    $GWL_ID - Retrieves the identifier of the window\n    $GWL_STYLE - Retrieves the window styles\n    $GWL_USERDATA - Retrieves the 32-bit value associated with the window\n    $GWL_WNDPROC - Retrieves the address of the window procedure",
        ];

    "_WinAPI_GetWindowModuleFileName" => "Retrieves the full path and file name of the module associated with the specified window handle",
        "_WinAPI_GetWindowModuleFileName ( $hWnd )",
        [
            "$hWnd": "Handle to the window",
        ];

    "_WinAPI_GetWindowOrg" => "Retrieves the x-coordinates and y-coordinates of the window origin for the specified device context",
        "_WinAPI_GetWindowOrg ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetWindowPlacement" => "Retrieves the show state and the restored, minimized, and maximized positions of the window",
        "_WinAPI_GetWindowPlacement ( $hWnd )",
        [
            "$hWnd": "Handle of the window",
        ];

    "_WinAPI_GetWindowRect" => "Retrieves the dimensions of the bounding rectangle of the specified window",
        "_WinAPI_GetWindowRect ( $hWnd )",
        [
            "$hWnd": "Handle of the window",
        ];

    "_WinAPI_GetWindowRgn" => "Obtains a copy of the window region of a window",
        "_WinAPI_GetWindowRgn ( $hWnd, $hRgn )",
        [
            "$hWnd": "Handle to the window whose window region is to be obtained",
            "$hRgn": "Handle to the region which will be modified to represent the window region",
        ];

    "_WinAPI_GetWindowRgnBox" => "Retrieves the dimensions of the tightest bounding rectangle for the window region of a window",
        "_WinAPI_GetWindowRgnBox ( $hWnd, ByRef $tRECT )",
        [
            "$hWnd": "Handle to the window",
            "$tRECT": "$tagRECT structure that receives the rectangle dimensions, in device units relative to the upper-left corner of the window",
        ];

    "_WinAPI_GetWindowsDirectory" => "Retrieves the path of the Windows directory",
        "_WinAPI_GetWindowsDirectory ( )",
        [];

    "_WinAPI_GetWindowText" => "Retrieves the text of the specified window's title bar",
        "_WinAPI_GetWindowText ( $hWnd )",
        [
            "$hWnd": "Handle of the window",
        ];

    "_WinAPI_GetWindowTextLength" => "Retrieves the length, in characters, of the specified window's title bar text",
        "_WinAPI_GetWindowTextLength ( $hWnd )",
        [
            "$hWnd": "Handle to the window or control",
        ];

    "_WinAPI_GetWindowTheme" => "Retrieves a theme handle to a window that has visual styles applied",
        "_WinAPI_GetWindowTheme ( $hWnd )",
        [
            "$hWnd": "Handle to the window",
        ];

    "_WinAPI_GetWindowThreadProcessId" => "Retrieves the identifier of the thread that created the specified window",
        "_WinAPI_GetWindowThreadProcessId ( $hWnd, ByRef $iPID )",
        [
            "$hWnd": "Window handle",
            "$iPID": "Process ID of the specified window",
        ];

    "_WinAPI_GetWindowWidth" => "Returns the width of the window",
        "_WinAPI_GetWindowWidth ( $hWnd )",
        [
            "$hWnd": "Handle of the window",
        ];

    "_WinAPI_GetWorkArea" => "Retrieves the size of the working area on the primary display monitor",
        "_WinAPI_GetWorkArea ( )",
        [];

    "_WinAPI_GetWorldTransform" => "Retrieves the current world-space to page-space transformation",
        "_WinAPI_GetWorldTransform ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_GetXYFromPoint" => "Returns the X/Y values from a $tagPOINT structure",
        "_WinAPI_GetXYFromPoint ( ByRef $tPoint, ByRef $iX, ByRef $iY )",
        [
            "$tPoint": "$tagPOINT structure",
            "$iX": "X value",
            "$iY": "Y value",
        ];

    "_WinAPI_GlobalMemoryStatus" => "Retrieves information about current available memory",
        "_WinAPI_GlobalMemoryStatus ( )",
        [];

    "_WinAPI_GradientFill" => "Fills rectangle or triangle gradient",
        "_WinAPI_GradientFill ( $hDC, Const ByRef $aVertex [, $iStart = 0 [, $iEnd = -1 [, $bRotate = False]]] )",
        [
            "$hDC": "Handle to the destination device context",
            "$aVertex": "The 2D array ([x1, y1, rgb1], [x2, y2, rgb2], ... [xN, yN, rgbN]) that contains the vertices",
            "$iStart": "**[optional]** The index of array to start filling at",
            "$iEnd": "**[optional]** The index of array to stop filling at",
            "$bRotate": "**[optional]** Specifies whether to fill the rectangle gradient vertically",
        ];

    "_WinAPI_GUIDFromString" => "Converts a string GUID to binary form",
        "_WinAPI_GUIDFromString ( $sGUID )",
        [
            "$sGUID": "GUID in string form",
        ];

    "_WinAPI_GUIDFromStringEx" => "Converts a string GUID to binary form",
        "_WinAPI_GUIDFromStringEx ( $sGUID, $tGUID )",
        [
            "$sGUID": "The string representation of the GUID, e.g. \"{00000000-0000-0000-0000-000000000000}\"",
            "$tGUID": "$tagGUID structure or a pointer to it that receives the converted GUID",
        ];

    "_WinAPI_HashData" => "Hashes an array of data",
        "_WinAPI_HashData ( $pMemory, $iSize [, $iLength = 32] )",
        [
            "$pMemory": "A pointer to an array of data to hash",
            "$iSize": "The number of bytes in the data array",
            "$iLength": "**[optional]** The size of the hash value to return, in bytes. The maximum value is 256.",
        ];

    "_WinAPI_HashString" => "Hashes a string",
        "_WinAPI_HashString ( $sString [, $bCaseSensitive = True [, $iLength = 32]] )",
        [
            "$sString": "The string to hash",
            "$bCaseSensitive": "**[optional]** Specifies whether the hash is case-sensitive:\n    True - The hash is case-sensitive\n    False - The hash is case-insensitive",
            "$iLength": "**[optional]** The size of the hash value to return, in bytes. The maximum value is 256.",
        ];

    "_WinAPI_HiByte" => "Returns the high byte of a 16-bit (2 bytes) value",
        "_WinAPI_HiByte ( $iValue )",
        [
            "$iValue": "16-bit value",
        ];

    "_WinAPI_HideCaret" => "Removes the caret from the screen",
        "_WinAPI_HideCaret ( $hWnd )",
        [
            "$hWnd": "Handle to the window that owns the caret. If 0, the caret is hidden from any window owned by the current task.",
        ];

    "_WinAPI_HiDWord" => "Returns the high DWORD of a 64-bit (8 bytes) value",
        "_WinAPI_HiDWord ( $iValue )",
        [
            "$iValue": "64-bit value",
        ];

    "_WinAPI_HiWord" => "Returns the high word of a longword value",
        "_WinAPI_HiWord ( $iLong )",
        [
            "$iLong": "Longword value",
        ];

    "_WinAPI_InflateRect" => "Increases or decreases the width and height of the specified rectangle",
        "_WinAPI_InflateRect ( ByRef $tRECT, $iDX, $iDY )",
        [
            "$tRECT": "$tagRECT structure that increases or decreases in size",
            "$iDX": "The amount to increase or decrease the rectangle width",
            "$iDY": "The amount to increase or decrease the rectangle height",
        ];

    "_WinAPI_InitMUILanguage" => "Enables an application to specify a language to be used with the common controls that is different from the system language",
        "_WinAPI_InitMUILanguage ( $iLanguage )",
        [
            "$iLanguage": "The language identifier of the language to be used by the common controls",
        ];

    "_WinAPI_InProcess" => "Determines whether a window belongs to the current process",
        "_WinAPI_InProcess ( $hWnd, ByRef $hLastWnd )",
        [
            "$hWnd": "Window handle to be tested",
            "$hLastWnd": "Last window handle that was tested",
        ];

    "_WinAPI_InternalGetWindowText" => "Returns the text of the specified window's title bar",
        "_WinAPI_InternalGetWindowText ( $hWnd )",
        [
            "$hWnd": "Handle to the window or control containing the text",
        ];

    "_WinAPI_IntersectClipRect" => "Creates a new clipping region from the intersection of the current clipping region and the specified rectangle",
        "_WinAPI_IntersectClipRect ( $hDC, $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
        ];

    "_WinAPI_IntersectRect" => "Creates the intersection of two rectangles",
        "_WinAPI_IntersectRect ( $tRECT1, $tRECT2 )",
        [
            "$tRECT1": "$tagRECT structure that contains the first source rectangle",
            "$tRECT2": "$tagRECT structure that contains the second source rectangle",
        ];

    "_WinAPI_IntToDWord" => "Converts a value of type INT to a value of type DWORD",
        "_WinAPI_IntToDWord ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_IntToFloat" => "Returns a 4 byte integer as a float value",
        "_WinAPI_IntToFloat ( $iInt )",
        [
            "$iInt": "Integer value",
        ];

    "_WinAPI_InvalidateRect" => "Adds a rectangle to the specified window's update region",
        "_WinAPI_InvalidateRect ( $hWnd [, $tRECT = 0 [, $bErase = True]] )",
        [
            "$hWnd": "Handle to the window whose update region has changed. If this parameter is 0, the system invalidates and redraws all windows.",
            "$tRECT": "**[optional]** $tagRECT structure that contains the client coordinates of the rectangle to be added to the update region. If this parameter is 0, the entire client area is added to the update region.",
            "$bErase": "**[optional]** Specifies whether the background within the update region is to be erased when the update region is processed.",
        ];

    "_WinAPI_InvalidateRgn" => "Adds a region to the specified window's update region",
        "_WinAPI_InvalidateRgn ( $hWnd [, $hRgn = 0 [, $bErase = True]] )",
        [
            "$hWnd": "Handle to the window with an update region that is to be modified",
            "$hRgn": "**[optional]** Handle to the region to be added to the update region. If 0, the entire client area is added.",
            "$bErase": "**[optional]** Specifies whether the background within the update region should be erased",
        ];

    "_WinAPI_InvertANDBitmap" => "Inverts the specified AND bitmask bitmap by performing a logical NOT operation",
        "_WinAPI_InvertANDBitmap ( $hBitmap [, $bDelete = False] )",
        [
            "$hBitmap": "Handle to the AND bitmask bitmap",
            "$bDelete": "**[optional]** Specifies whether to delete the source bitmap after the function is successful",
        ];

    "_WinAPI_InvertColor" => "Inverts (negative) the specified color",
        "_WinAPI_InvertColor ( $iColor )",
        [
            "$iColor": "The color to invert",
        ];

    "_WinAPI_InvertRect" => "Inverts a rectangle in a window by performing a logical NOT operation on the color values for each pixel",
        "_WinAPI_InvertRect ( $hDC, ByRef $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle to be inverted",
        ];

    "_WinAPI_InvertRgn" => "Inverts the colors in the specified region",
        "_WinAPI_InvertRgn ( $hDC, $hRgn )",
        [
            "$hDC": "Handle to the device context",
            "$hRgn": "Handle to the region for which colors are inverted",
        ];

    "_WinAPI_IOCTL" => "Creates a control code which uses in the _WinAPI_DeviceIoControl() function",
        "_WinAPI_IOCTL ( $iDeviceType, $iFunction, $iMethod, $iAccess )",
        [
            "$iDeviceType": "The type of device",
            "$iFunction": "The function code, from 0 to 4095",
            "$iMethod": "The method code for how buffers are passed for I/O and file system controls",
            "$iAccess": "The type of access that a caller must request when opening the file object that represents the device",
        ];

    "_WinAPI_IsBadCodePtr" => "Determines whether the calling process has read access to the memory at the specified address",
        "_WinAPI_IsBadCodePtr ( $pAddress )",
        [
            "$pAddress": "A pointer to a memory address",
        ];

    "_WinAPI_IsBadReadPtr" => "Verifies that the calling process has read access to the specified range of memory",
        "_WinAPI_IsBadReadPtr ( $pAddress, $iLength )",
        [
            "$pAddress": "A pointer to the first byte of the memory block",
            "$iLength": "The size of the memory block, in bytes",
        ];

    "_WinAPI_IsBadStringPtr" => "Verifies that the calling process has read access to the specified range of memory",
        "_WinAPI_IsBadStringPtr ( $pAddress, $iLength )",
        [
            "$pAddress": "A pointer to a null-terminated string, either Unicode or ASCII",
            "$iLength": "The maximum size of the string, in characters",
        ];

    "_WinAPI_IsBadWritePtr" => "Verifies that the calling process has write access to the specified range of memory",
        "_WinAPI_IsBadWritePtr ( $pAddress, $iLength )",
        [
            "$pAddress": "A pointer to the first byte of the memory block",
            "$iLength": "The size of the memory block, in bytes",
        ];

    "_WinAPI_IsChild" => "Tests whether a window is a child window or descendant window of a specified parent window",
        "_WinAPI_IsChild ( $hWnd, $hWndParent )",
        [
            "$hWnd": "Handle to the window to be tested",
            "$hWndParent": "Handle to the parent window",
        ];

    "_WinAPI_IsClassName" => "Wrapper to check ClassName of the control",
        "_WinAPI_IsClassName ( $hWnd, $sClassName )",
        [
            "$hWnd": "Handle to a control",
            "$sClassName": "Class name to check",
        ];

    "_WinAPI_IsDoorOpen" => "Checks whether the CD tray is open or closed",
        "_WinAPI_IsDoorOpen ( $sDrive )",
        [
            "$sDrive": "The drive letter of the CD tray, in the format D:, E:, etc.",
        ];

    "_WinAPI_IsElevated" => "Determines whether the current process is elevated",
        "_WinAPI_IsElevated ( )",
        [];

    "_WinAPI_IsHungAppWindow" => "Determines whether the system considers that a specified application is not responding",
        "_WinAPI_IsHungAppWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the window",
        ];

    "_WinAPI_IsIconic" => "Determines whether the specified window is minimized (iconic)",
        "_WinAPI_IsIconic ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be tested",
        ];

    "_WinAPI_IsInternetConnected" => "Determines whether the current user is connected to the Internet",
        "_WinAPI_IsInternetConnected ( )",
        [];

    "_WinAPI_IsLoadKBLayout" => "Determines whether the specified input locale has been loaded into the system",
        "_WinAPI_IsLoadKBLayout ( $iLanguage )",
        [
            "$iLanguage": "The input locale identifier",
        ];

    "_WinAPI_IsMemory" => "Determines whether the specified pointer points to the memory block in the internal library heap",
        "_WinAPI_IsMemory ( $pMemory )",
        [
            "$pMemory": "A pointer to the memory block to test",
        ];

    "_WinAPI_IsNetworkAlive" => "Determines whether a local system is connected to a network, and identifies the type of network connection",
        "_WinAPI_IsNetworkAlive ( )",
        [];

    "_WinAPI_IsPathShared" => "Determines whether the path is shared",
        "_WinAPI_IsPathShared ( $sFilePath )",
        [
            "$sFilePath": "The path to test",
        ];

    "_WinAPI_IsProcessInJob" => "Determines whether the process is running in the specified job",
        "_WinAPI_IsProcessInJob ( $hProcess [, $hJob = 0] )",
        [
            "$hProcess": "Handle to the process to be tested",
            "$hJob": "**[optional]** Handle to the job. If 0, the function tests if the process is running under any job.",
        ];

    "_WinAPI_IsProcessorFeaturePresent" => "Determines whether the specified processor feature is supported by the current computer",
        "_WinAPI_IsProcessorFeaturePresent ( $iFeature )",
        [
            "$iFeature": "The processor feature to be tested, e.g. $PF_3DNOW_INSTRUCTIONS_AVAILABLE, $PF_MMX_INSTRUCTIONS_AVAILABLE, $PF_NX_ENABLED or $PF_XMMI64_INSTRUCTIONS_AVAILABLE",
        ];

    "_WinAPI_IsRectEmpty" => "Determines whether the specified rectangle is empty",
        "_WinAPI_IsRectEmpty ( $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
        ];

    "_WinAPI_IsThemeActive" => "Tests if a visual style for the current application is active",
        "_WinAPI_IsThemeActive ( )",
        [];

    "_WinAPI_IsThemeBackgroundPartiallyTransparent" => "Retrieves whether the background specified by the visual style has transparent pieces or alpha-blended pieces",
        "_WinAPI_IsThemeBackgroundPartiallyTransparent ( $hTheme, $iPartID, $iStateID )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The part",
            "$iStateID": "The state of the part",
        ];

    "_WinAPI_IsThemePartDefined" => "Retrieves whether a visual style has defined parameters for the specified part",
        "_WinAPI_IsThemePartDefined ( $hTheme, $iPartID )",
        [
            "$hTheme": "Handle to a window's specified theme data",
            "$iPartID": "The part",
        ];

    "_WinAPI_IsValidLocale" => "Determines if the specified locale is installed or supported on the operating system",
        "_WinAPI_IsValidLocale ( $iLCID [, $iFlag = 0] )",
        [
            "$iLCID": "The locale identifier (LCID) of the locale to validate",
            "$iFlag": "**[optional]** The flag specifying the validity test to apply, $LCID_INSTALLED or $LCID_SUPPORTED",
        ];

    "_WinAPI_IsWindow" => "Determines whether the specified window handle identifies an existing window",
        "_WinAPI_IsWindow ( $hWnd )",
        [
            "$hWnd": "Handle to be tested",
        ];

    "_WinAPI_IsWindowArranged" => "Determines whether the specified window is arranged (snapped)",
        "_WinAPI_IsWindowArranged ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be tested",
        ];

    "_WinAPI_IsWindowEnabled" => "Determines whether the specified window is enabled for mouse and keyboard input",
        "_WinAPI_IsWindowEnabled ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be tested",
        ];

    "_WinAPI_IsWindowUnicode" => "Determines whether the specified window is a native Unicode window",
        "_WinAPI_IsWindowUnicode ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be tested",
        ];

    "_WinAPI_IsWindowVisible" => "Retrieves the visibility state of the specified window",
        "_WinAPI_IsWindowVisible ( $hWnd )",
        [
            "$hWnd": "Handle of window",
        ];

    "_WinAPI_IsWow64Process" => "Determines whether the specified process is running under WOW64",
        "_WinAPI_IsWow64Process ( [$iPID = 0] )",
        [
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_IsWritable" => "Determines whether the disk is writable",
        "_WinAPI_IsWritable ( $sDrive )",
        [
            "$sDrive": "The drive letter, in the format D:, E:, etc.",
        ];

    "_WinAPI_IsZoomed" => "Determines whether a window is maximized",
        "_WinAPI_IsZoomed ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be tested",
        ];

    "_WinAPI_Keybd_Event" => "Synthesizes a keystroke",
        "_WinAPI_Keybd_Event ( $vKey, $iFlags [, $iScanCode = 0 [, $iExtraInfo = 0]] )",
        [
            "$vKey": "The virtual-key code",
            "$iFlags": "The flags that specifies various aspects of function operation, $KEYEVENTF_EXTENDEDKEY or $KEYEVENTF_KEYUP",
            "$iScanCode": "**[optional]** The hardware scan code for the key",
            "$iExtraInfo": "**[optional]** An additional value associated with the key stroke",
        ];

    "_WinAPI_KillTimer" => "Destroys the specified timer",
        "_WinAPI_KillTimer ( $hWnd, $iTimerID )",
        [
            "$hWnd": "Handle to the window associated with the specified timer",
            "$iTimerID": "The timer to be destroyed",
        ];

    "_WinAPI_LineTo" => "Draws a line from the current position up to, but not including, the specified point",
        "_WinAPI_LineTo ( $hDC, $iX, $iY )",
        [
            "$hDC": "Handle to device context",
            "$iX": "X coordinate of the line's ending point",
            "$iY": "Y coordinate of the line's ending point",
        ];

    "_WinAPI_LoadBitmap" => "Loads the specified bitmap resource from a module's executable file",
        "_WinAPI_LoadBitmap ( $hInstance, $sBitmap )",
        [
            "$hInstance": "Handle to the instance of the module whose executable file contains the bitmap to be loaded",
            "$sBitmap": "The name or identifier of the bitmap resource to be loaded",
        ];

    "_WinAPI_LoadCursor" => "Loads the specified cursor resource from the executable file associated with an application instance",
        "_WinAPI_LoadCursor ( $hInstance, $sName )",
        [
            "$hInstance": "Handle to an instance of the module whose executable file contains the cursor to be loaded",
            "$sName": "The name or resource identifier of the cursor resource to be loaded, or a predefined cursor such as $OCR_NORMAL",
        ];

    "_WinAPI_LoadCursorFromFile" => "Creates a cursor based on data contained in a file",
        "_WinAPI_LoadCursorFromFile ( $sFilePath )",
        [
            "$sFilePath": "The source of the file data to be used to create the cursor",
        ];

    "_WinAPI_LoadIcon" => "Loads the specified icon resource from the executable file associated with an application instance",
        "_WinAPI_LoadIcon ( $hInstance, $sName )",
        [
            "$hInstance": "Handle to an instance of the module whose executable file contains the icon to be loaded",
            "$sName": "The name or resource identifier of the icon resource to be loaded, or a predefined icon such as $IDI_APPLICATION",
        ];

    "_WinAPI_LoadIconMetric" => "Loads the specified icon resource with a client-specified system metric",
        "_WinAPI_LoadIconMetric ( $hInstance, $sName, $iMetric )",
        [
            "$hInstance": "Handle to the module of either a DLL or executable file that contains the icon to be loaded",
            "$sName": "The name or resource identifier of the icon resource to be loaded",
            "$iMetric": "The desired metric, $LIM_SMALL or $LIM_LARGE",
        ];

    "_WinAPI_LoadIconWithScaleDown" => "Loads an icon and scales it down if required",
        "_WinAPI_LoadIconWithScaleDown ( $hInstance, $sName, $iWidth, $iHeight )",
        [
            "$hInstance": "Handle to the module of either a DLL or executable file that contains the icon to be loaded",
            "$sName": "The name or resource identifier of the icon resource to be loaded",
            "$iWidth": "The desired width, in pixels, of the icon",
            "$iHeight": "The desired height, in pixels, of the icon",
        ];

    "_WinAPI_LoadImage" => "Loads an icon, cursor, or bitmap",
        "_WinAPI_LoadImage ( $hInstance, $sImage, $iType, $iXDesired, $iYDesired, $iLoad )",
        [
            "$hInstance": "Identifies an instance of the module that contains the image to be loaded. To load an OEM image, set this parameter to zero.",
            "$sImage": "Identifies the image to load. If the $hInstance parameter is not 0 and the $iLoad parameter does not include $LR_LOADFROMFILE, $sImage is a string that contains the name of the image resource in the $hInstance module.",
            "$iType": "Specifies the type of image to be loaded:\n    $IMAGE_BITMAP - Loads a bitmap\n    $IMAGE_CURSOR - Loads a cursor\n    $IMAGE_ICON - Loads an icon",
            "$iXDesired": "Specifies the width, in pixels, of the icon or cursor",
            "$iYDesired": "Specifies the height, in pixels, of the icon or cursor",
            "$iLoad": "Load flags, e.g. $LR_DEFAULTCOLOR, $LR_CREATEDIBSECTION, $LR_DEFAULTSIZE, $LR_LOADFROMFILE, $LR_LOADTRANSPARENT, $LR_MONOCHROME or $LR_SHARED",
        ];

    "_WinAPI_LoadIndirectString" => "Extracts a specified text resource when given that resource in the form of an indirect string",
        "_WinAPI_LoadIndirectString ( $sStrIn )",
        [
            "$sStrIn": "The input string, in the form \"@filename,resource\"",
        ];

    "_WinAPI_LoadKeyboardLayout" => "Loads a new input locale identifier into the system",
        "_WinAPI_LoadKeyboardLayout ( $iLanguage [, $iFlag = 0] )",
        [
            "$iLanguage": "The input locale identifier to load",
            "$iFlag": "**[optional]** The flag that specifies how the input locale identifier is to be loaded, e.g. $KLF_ACTIVATE, $KLF_NOTELLSHELL, $KLF_REORDER, $KLF_REPLACELANG or $KLF_SUBSTITUTE_OK",
        ];

    "_WinAPI_LoadLibrary" => "Maps a specified executable module into the address space of the calling process",
        "_WinAPI_LoadLibrary ( $sFileName )",
        [
            "$sFileName": "Names a Win32 executable module (either a .dll or an .exe file). The name specified is the filename of the executable module.",
        ];

    "_WinAPI_LoadLibraryEx" => "Maps a specified executable module into the address space of the calling process",
        "_WinAPI_LoadLibraryEx ( $sFileName [, $iFlags = 0] )",
        [
            "$sFileName": "Names a Win32 executable module (either a .dll or an .exe file). The name specified is the filename of the executable module.",
            "$iFlags": "**[optional]** Specifies the action to take when loading the module:\n    $DONT_RESOLVE_DLL_REFERENCES - Don't call DllMain for initialization and termination\n    $LOAD_LIBRARY_AS_DATAFILE - Map the file into the address space as if it were a data file\n    $LOAD_WITH_ALTERED_SEARCH_PATH - Use an alternate file search strategy",
        ];

    "_WinAPI_LoadMedia" => "Loads media into a device",
        "_WinAPI_LoadMedia ( $sDrive )",
        [
            "$sDrive": "The drive letter of the device into which to load media, in the format D:, E:, etc.",
        ];

    "_WinAPI_LoadResource" => "Loads the specified resource into global memory",
        "_WinAPI_LoadResource ( $hInstance, $hResource )",
        [
            "$hInstance": "Handle to the module whose executable file contains the resource",
            "$hResource": "Handle to the resource to be loaded, returned by _WinAPI_FindResource()",
        ];

    "_WinAPI_LoadString" => "Loads a string resource from the executable file associated with a specified module",
        "_WinAPI_LoadString ( $hInstance, $iStringID )",
        [
            "$hInstance": "Handle to an instance of the module whose executable file contains the string resource",
            "$iStringID": "Specifies the integer identifier of the string to be loaded",
        ];

    "_WinAPI_LoadStringEx" => "Loads a string resource for the specified language from the specified module",
        "_WinAPI_LoadStringEx ( $hModule, $iID [, $iLanguage = 0] )",
        [
            "$hModule": "Handle to the module whose executable file contains the string resource, or the name of the file",
            "$iID": "The identifier of the string to be loaded",
            "$iLanguage": "**[optional]** The language identifier of the string resource",
        ];

    "_WinAPI_LoByte" => "Returns the low byte of a 16-bit (2 bytes) value",
        "_WinAPI_LoByte ( $iValue )",
        [
            "$iValue": "16-bit value",
        ];

    "_WinAPI_LocalFree" => "Frees the specified local memory object and invalidates its handle",
        "_WinAPI_LocalFree ( $hMemory )",
        [
            "$hMemory": "A global memory handle",
        ];

    "_WinAPI_LockDevice" => "Enables or disables the mechanism that ejects media, for those devices possessing that locking capability",
        "_WinAPI_LockDevice ( $sDrive, $bLock )",
        [
            "$sDrive": "The drive letter of the device, in the format D:, E:, etc.",
            "$bLock": "Specifies whether to lock or unlock the device",
        ];

    "_WinAPI_LockFile" => "Locks the specified file for exclusive access by the calling process",
        "_WinAPI_LockFile ( $hFile, $iOffset, $iLength )",
        [
            "$hFile": "Handle to the file",
            "$iOffset": "The starting byte offset in the file where the lock should begin",
            "$iLength": "The length of the byte range to be locked",
        ];

    "_WinAPI_LockResource" => "Locks the specified resource in memory",
        "_WinAPI_LockResource ( $hData )",
        [
            "$hData": "Handle to the resource to be locked, returned by _WinAPI_LoadResource()",
        ];

    "_WinAPI_LockWindowUpdate" => "Disables or enables drawing in the specified window",
        "_WinAPI_LockWindowUpdate ( $hWnd )",
        [
            "$hWnd": "Handle to the window in which drawing will be disabled. If 0, drawing in the locked window is enabled.",
        ];

    "_WinAPI_LockWorkStation" => "Locks the workstation's display",
        "_WinAPI_LockWorkStation ( )",
        [];

    "_WinAPI_LoDWord" => "Returns the low DWORD of a 64-bit (8 bytes) value",
        "_WinAPI_LoDWord ( $iValue )",
        [
            "$iValue": "64-bit value",
        ];

    "_WinAPI_LongMid" => "Extracts a number of bits from a DWORD (32-bit) value",
        "_WinAPI_LongMid ( $iValue, $iStart, $iCount )",
        [
            "$iValue": "32-bit value",
            "$iStart": "The bit position to start. The first bit is 0.",
            "$iCount": "The number of bits to extract",
        ];

    "_WinAPI_LookupAccountName" => "Retrieves a security identifier (SID) for the account and the name of the domain",
        "_WinAPI_LookupAccountName ( $sAccount [, $sSystem = ''] )",
        [
            "$sAccount": "The account name",
            "$sSystem": "**[optional]** The name of the system. If an empty string, the local system is used.",
        ];

    "_WinAPI_LookupAccountSid" => "Retrieves the name of the account for a SID and the name of the first domain on which this SID is found",
        "_WinAPI_LookupAccountSid ( $pSID [, $sSystem = ''] )",
        [
            "$pSID": "A pointer to the SID to look up",
            "$sSystem": "**[optional]** The name of the system. If an empty string, the local system is used.",
        ];

    "_WinAPI_LookupIconIdFromDirectoryEx" => "Searches through icon or cursor data for the icon or cursor that best fits the current display device",
        "_WinAPI_LookupIconIdFromDirectoryEx ( $pData [, $bIcon = True [, $iXDesiredPixels = 0 [, $iYDesiredPixels = 0 [, $iFlags = 0]]]] )",
        [
            "$pData": "Pointer to the icon or cursor directory data",
            "$bIcon": "**[optional]** Specifies whether an icon or a cursor is sought",
            "$iXDesiredPixels": "**[optional]** The desired width, in pixels, of the icon",
            "$iYDesiredPixels": "**[optional]** The desired height, in pixels, of the icon",
            "$iFlags": "**[optional]** The load flags, e.g. $LR_DEFAULTCOLOR or $LR_MONOCHROME",
        ];

    "_WinAPI_LookupPrivilegeValue" => "Retrieves the locally unique identifier (LUID) used to represent the specified privilege name",
        "_WinAPI_LookupPrivilegeValue ( $sName )",
        [
            "$sName": "The name of the privilege, e.g. $SE_DEBUG_NAME or $SE_SHUTDOWN_NAME",
        ];

    "_WinAPI_LoWord" => "Returns the low word of a longword",
        "_WinAPI_LoWord ( $iLong )",
        [
            "$iLong": "Longword value",
        ];

    "_WinAPI_LPtoDP" => "Converts logical coordinates into device coordinates",
        "_WinAPI_LPtoDP ( $hDC, ByRef $tPOINT [, $iCount = 1] )",
        [
            "$hDC": "Handle to the device context",
            "$tPOINT": "$tagPOINT structure, or an array of them, that contains the coordinates to be transformed",
            "$iCount": "**[optional]** The number of points in the $tPOINT array",
        ];

    "_WinAPI_MAKELANGID" => "Construct language id from a primary language id and a sublanguage id",
        "_WinAPI_MAKELANGID ( $iLngIDPrimary, $iLngIDSub )",
        [
            "$iLngIDPrimary": "Primary language id",
            "$iLngIDSub": "Sub-language id",
        ];

    "_WinAPI_MAKELCID" => "Construct locale id from a language id and a sort id",
        "_WinAPI_MAKELCID ( $iLngID, $iSortID )",
        [
            "$iLngID": "Language id",
            "$iSortID": "Sort id",
        ];

    "_WinAPI_MakeLong" => "Returns a longint value from two int values",
        "_WinAPI_MakeLong ( $iLo, $iHi )",
        [
            "$iLo": "Low word",
            "$iHi": "Hi word",
        ];

    "_WinAPI_MakeQWord" => "Returns a QWORD value from two int values",
        "_WinAPI_MakeQWord ( $iLoDWORD, $iHiDWORD )",
        [
            "$iLoDWORD": "Low DWORD",
            "$iHiDWORD": "Hi DWORD",
        ];

    "_WinAPI_MapViewOfFile" => "Maps a view of a file mapping into the address space of a calling process",
        "_WinAPI_MapViewOfFile ( $hMapping [, $iOffset = 0 [, $iBytes = 0 [, $iAccess = 0x0006]]] )",
        [
            "$hMapping": "Handle to a file mapping object",
            "$iOffset": "**[optional]** The file offset where the view is to begin",
            "$iBytes": "**[optional]** The number of bytes of a file mapping to map to the view. If 0, the mapping extends to the end of the file.",
            "$iAccess": "**[optional]** The type of access to a file mapping object, e.g. $FILE_MAP_READ, $FILE_MAP_WRITE or $FILE_MAP_COPY",
        ];

    "_WinAPI_MapVirtualKey" => "Translates a virtual-key code into a scan code or character value, or translates a scan code into a virtual-key code",
        "_WinAPI_MapVirtualKey ( $iCode, $iType [, $hLocale = 0] )",
        [
            "$iCode": "The virtual key code or scan code for a key",
            "$iType": "The translation to perform, e.g. $MAPVK_VK_TO_CHAR, $MAPVK_VK_TO_VSC, $MAPVK_VSC_TO_VK or $MAPVK_VSC_TO_VK_EX",
            "$hLocale": "**[optional]** The input locale identifier to use for translating the specified code",
        ];

    "_WinAPI_MapWindowPoints" => "Converts (maps) a set of points from a coordinate space relative to one window to a coordinate space relative to another window",
        "_WinAPI_MapWindowPoints ( $hWndFrom, $hWndTo, ByRef $tPoints [, $iCount = 2] )",
        [
            "$hWndFrom": "Handle to the window from which points are converted. If 0, the points are in screen coordinates.",
            "$hWndTo": "Handle to the window to which points are converted. If 0, the points are converted to screen coordinates.",
            "$tPoints": "The structure that contains the points to convert, e.g. a $tagRECT or an array of $tagPOINT",
            "$iCount": "**[optional]** The number of $tagPOINT structures in $tPoints",
        ];

    "_WinAPI_MaskBlt" => "Combines the color data for the source and destination bitmaps using the specified mask and raster operation",
        "_WinAPI_MaskBlt ( $hDestDC, $iXDest, $iYDest, $iWidth, $iHeight, $hSrcDC, $iXSrc, $iYSrc, $hMask, $iXMask, $iYMask, $iRop )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$iXDest": "The x-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iYDest": "The y-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iWidth": "The width, in logical units, of the destination rectangle and source bitmap",
            "$iHeight": "The height, in logical units, of the destination rectangle and source bitmap",
            "$hSrcDC": "Handle to the device context from which the bitmap is to be copied",
            "$iXSrc": "The x-coordinate, in logical units, of the upper-left corner of the source bitmap",
            "$iYSrc": "The y-coordinate, in logical units, of the upper-left corner of the source bitmap",
            "$hMask": "Handle to the monochrome mask bitmap combined with the color bitmap in the source device context",
            "$iXMask": "The horizontal pixel offset for the mask bitmap",
            "$iYMask": "The vertical pixel offset for the mask bitmap",
            "$iRop": "The foreground and background ternary raster operation codes",
        ];

    "_WinAPI_MessageBeep" => "Plays a waveform sound",
        "_WinAPI_MessageBeep ( [$iType = 1] )",
        [
            "$iType": "**[optional]** The sound type, as identified by an entry in the registry:\n    0 - Simple beep. If the sound card is not available, the sound is generated using the speaker.\n    1 - System default (MB_OK)\n    2 - System hand (MB_ICONHAND)\n    3 - System question (MB_ICONQUESTION)\n    4 - System exclamation (MB_ICONEXCLAMATION)\n    5 - System asterisk (MB_ICONASTERISK)",
        ];

    "_WinAPI_MessageBoxCheck" => "Displays a message box that gives the user the option of suppressing further occurrences",
        "_WinAPI_MessageBoxCheck ( $iType, $sTitle, $sText, $sRegVal [, $iDefault = -1 [, $hParent = 0]] )",
        [
            "$iType": "The type of message box, e.g. $MB_OK, $MB_OKCANCEL or $MB_YESNO, combined with an icon flag",
            "$sTitle": "The title of the message box",
            "$sText": "The message to be displayed",
            "$sRegVal": "A unique registry value name used to store the user's choice",
            "$iDefault": "**[optional]** The value that the function returns when the user has opted not to have the message box displayed again",
            "$hParent": "**[optional]** Handle to the parent window of the message box",
        ];

    "_WinAPI_MessageBoxIndirect" => "Creates, displays, and operates a message box",
        "_WinAPI_MessageBoxIndirect ( $tMSGBOXPARAMS )",
        [
            "$tMSGBOXPARAMS": "$tagMSGBOXPARAMS structure that contains information used to display the message box",
        ];

    "_WinAPI_MirrorIcon" => "Mirrors the specified icon",
        "_WinAPI_MirrorIcon ( $hIcon [, $bDelete = False] )",
        [
            "$hIcon": "Handle to the source icon",
            "$bDelete": "**[optional]** Specifies whether to delete the source icon after the function is successful",
        ];

    "_WinAPI_ModifyWorldTransform" => "Changes the world transformation for a device context using the specified mode",
        "_WinAPI_ModifyWorldTransform ( $hDC, ByRef $tXFORM, $iMode )",
        [
            "$hDC": "Handle to the device context",
            "$tXFORM": "$tagXFORM structure used to modify the world transformation",
            "$iMode": "How the transformation data modifies the current world transformation, $MWT_IDENTITY, $MWT_LEFTMULTIPLY or $MWT_RIGHTMULTIPLY",
        ];

    "_WinAPI_MonitorFromPoint" => "Retrieves a handle to the display monitor that contains a specified point",
        "_WinAPI_MonitorFromPoint ( $tPOINT [, $iFlag = 1] )",
        [
            "$tPOINT": "$tagPOINT structure that specifies the point of interest in virtual-screen coordinates",
            "$iFlag": "**[optional]** The return value if the point is not contained within any display monitor, e.g. $MONITOR_DEFAULTTONEAREST",
        ];

    "_WinAPI_MonitorFromRect" => "Retrieves a handle to the display monitor that has the largest area of intersection with a specified rectangle",
        "_WinAPI_MonitorFromRect ( $tRECT [, $iFlag = 1] )",
        [
            "$tRECT": "$tagRECT structure that specifies the rectangle of interest in virtual-screen coordinates",
            "$iFlag": "**[optional]** The return value if the rectangle does not intersect any display monitor, e.g. $MONITOR_DEFAULTTONEAREST",
        ];

    "_WinAPI_MonitorFromWindow" => "Retrieves a handle to the display monitor that has the largest area of intersection with the bounding rectangle of a specified window",
        "_WinAPI_MonitorFromWindow ( $hWnd [, $iFlag = 1] )",
        [
            "$hWnd": "Handle to the window of interest",
            "$iFlag": "**[optional]** The return value if the window does not intersect any display monitor, e.g. $MONITOR_DEFAULTTONEAREST",
        ];

    "_WinAPI_Mouse_Event" => "Synthesizes mouse motion and button clicks",
        "_WinAPI_Mouse_Event ( $iFlags [, $iX = 0 [, $iY = 0 [, $iData = 0 [, $iExtraInfo = 0]]]] )",
        [
            "$iFlags": "A set of flag bits that specify various aspects of mouse motion and button clicking, e.g. $MOUSEEVENTF_ABSOLUTE, $MOUSEEVENTF_MOVE, $MOUSEEVENTF_LEFTDOWN or $MOUSEEVENTF_LEFTUP",
            "$iX": "**[optional]** The mouse's absolute position along the X axis or its amount of motion since the last mouse event was generated",
            "$iY": "**[optional]** The mouse's absolute position along the Y axis or its amount of motion since the last mouse event was generated",
            "$iData": "**[optional]** The amount of wheel movement, or which X buttons were pressed or released",
            "$iExtraInfo": "**[optional]** An additional value associated with the mouse event",
        ];

    "_WinAPI_MoveFileEx" => "Moves a file or directory, notifying the application of its progress through a callback function",
        "_WinAPI_MoveFileEx ( $sExistingFile, $sNewFile [, $iFlags = 0 [, $pProgressProc = 0 [, $pData = 0]]] )",
        [
            "$sExistingFile": "The name of the existing file or directory on the local computer",
            "$sNewFile": "The new name of the file or directory on the local computer",
            "$iFlags": "**[optional]** The move options, e.g. $MOVE_FILE_COPY_ALLOWED, $MOVE_FILE_DELAY_UNTIL_REBOOT or $MOVE_FILE_REPLACE_EXISTING",
            "$pProgressProc": "**[optional]** The address of a callback function that is called each time another portion of the file has been moved",
            "$pData": "**[optional]** The argument to be passed to the callback function",
        ];

    "_WinAPI_MoveMemory" => "Moves a block of memory from one location to another",
        "_WinAPI_MoveMemory ( $pDestination, $pSource, $iLength )",
        [
            "$pDestination": "A pointer to the starting address of the move destination",
            "$pSource": "A pointer to the starting address of the block of memory to be moved",
            "$iLength": "The size of the block of memory to move, in bytes",
        ];

    "_WinAPI_MoveTo" => "Updates the current position to the specified point",
        "_WinAPI_MoveTo ( $hDC, $iX, $iY )",
        [
            "$hDC": "Handle to device context",
            "$iX": "X coordinate of the new position",
            "$iY": "Y coordinate of the new position",
        ];

    "_WinAPI_MoveWindow" => "Changes the position and dimensions of the specified window",
        "_WinAPI_MoveWindow ( $hWnd, $iX, $iY, $iWidth, $iHeight [, $bRepaint = True] )",
        [
            "$hWnd": "Handle to the window",
            "$iX": "Specifies the new position of the left side of the window",
            "$iY": "Specifies the new position of the top of the window",
            "$iWidth": "Specifies the new width of the window",
            "$iHeight": "Specifies the new height of the window",
            "$bRepaint": "**[optional]** Specifies whether the window is to be repainted. If True, the window receives a $WM_PAINT message. If False, no repainting of any kind occurs.",
        ];

    "_WinAPI_MsgBox" => "Display MsgBox on the screen",
        "_WinAPI_MsgBox ( $iFlags, $sTitle, $sText )",
        [
            "$iFlags": "Flags to use when creating the message box",
            "$sTitle": "Title of the message box",
            "$sText": "Text to display in the message box",
        ];

    "_WinAPI_MulDiv" => "Multiplies two 32-bit values and then divides the 64-bit result by a third 32-bit value",
        "_WinAPI_MulDiv ( $iNumber, $iNumerator, $iDenominator )",
        [
            "$iNumber": "Multiplicand",
            "$iNumerator": "Multiplier",
            "$iDenominator": "Number by which the result of the multiplication is to be divided",
        ];

    "_WinAPI_MultiByteToWideChar" => "Maps a character string to a UTF-16 (wide character) string",
        "_WinAPI_MultiByteToWideChar ( $vText [, $iCodePage = 0 [, $iFlags = 0 [, $bRetString = False]]] )",
        [
            "$vText": "Text or DllStruct containing multibyte text to be converted",
            "$iCodePage": "**[optional]** Specifies the code page to be used to perform the conversion:\n    0 - The current system Windows ANSI code page\n    1 - The current system OEM code page\n    2 - The current system Macintosh code page\n    3 - The Windows ANSI code page for the current thread\n    42 - Symbol code page\n    65000 - UTF-7\n    65001 - UTF-8",
            "$iFlags": "**[optional]** Flags that indicate whether to translate to precomposed or composite wide characters",
            "$bRetString": "**[optional]** Flags that indicate whether to return a String or a DllStruct:\n    False - Return a DllStruct\n    True - Return a String",
        ];

    "_WinAPI_MultiByteToWideCharEx" => "Maps a character string to a wide-character (Unicode) string",
        "_WinAPI_MultiByteToWideCharEx ( $sText, $pText [, $iCodePage = 0 [, $iFlags = 0]] )",
        [
            "$sText": "Text to be converted",
            "$pText": "Pointer to the buffer that receives the converted string",
            "$iCodePage": "**[optional]** Specifies the code page to be used to perform the conversion",
            "$iFlags": "**[optional]** Flags that indicate whether to translate to precomposed or composite wide characters",
        ];

    "_WinAPI_NtStatusToDosError" => "Converts the specified NTSTATUS code to its equivalent system error code",
        "_WinAPI_NtStatusToDosError ( $iStatus )",
        [
            "$iStatus": "The NTSTATUS code to be converted",
        ];

    "_WinAPI_OemToChar" => "Converts a string from the OEM-defined character set into either an ANSI or a wide-character string",
        "_WinAPI_OemToChar ( $sStr )",
        [
            "$sStr": "The string to convert",
        ];

    "_WinAPI_OffsetClipRgn" => "Moves the clipping region of a device context by the specified offsets",
        "_WinAPI_OffsetClipRgn ( $hDC, $iXOffset, $iYOffset )",
        [
            "$hDC": "Handle to the device context",
            "$iXOffset": "The number of logical units to move left or right",
            "$iYOffset": "The number of logical units to move up or down",
        ];

    "_WinAPI_OffsetPoints" => "Moves a points from the array by the specified offsets",
        "_WinAPI_OffsetPoints ( ByRef $aPoint, $iXOffset, $iYOffset [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$aPoint": "The 2D array ([x1, y1, ...], [x2, y2, ...], ... [xN, yN, ...])",
            "$iXOffset": "The number of logical units to move left or right",
            "$iYOffset": "The number of logical units to move up or down",
            "$iStart": "**[optional]** The index of array to start moving at",
            "$iEnd": "**[optional]** The index of array to stop moving at",
        ];

    "_WinAPI_OffsetRect" => "Moves the specified rectangle by the specified offsets",
        "_WinAPI_OffsetRect ( ByRef $tRECT, $iDX, $iDY )",
        [
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle to be moved",
            "$iDX": "The amount to move the rectangle left or right",
            "$iDY": "The amount to move the rectangle up or down",
        ];

    "_WinAPI_OffsetRgn" => "Moves a region by the specified offsets",
        "_WinAPI_OffsetRgn ( $hRgn, $iXOffset, $iYOffset )",
        [
            "$hRgn": "Handle to the region to be moved",
            "$iXOffset": "The number of logical units to move left or right",
            "$iYOffset": "The number of logical units to move up or down",
        ];

    "_WinAPI_OffsetWindowOrg" => "Modifies the window origin for a device context using the specified horizontal and vertical offsets",
        "_WinAPI_OffsetWindowOrg ( $hDC, $iXOffset, $iYOffset )",
        [
            "$hDC": "Handle to the device context",
            "$iXOffset": "The horizontal offset, in logical units",
            "$iYOffset": "The vertical offset, in logical units",
        ];

    "_WinAPI_OpenDesktop" => "Opens the specified desktop object",
        "_WinAPI_OpenDesktop ( $sName [, $iAccess = 0 [, $iFlags = 0 [, $bInherit = False]]] )",
        [
            "$sName": "The name of the desktop to be opened",
            "$iAccess": "**[optional]** The access to the desktop",
            "$iFlags": "**[optional]** The flag that allows processes running in other accounts on the desktop to set hooks, $DF_ALLOWOTHERACCOUNTHOOK",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenEvent" => "Opens an existing named event object",
        "_WinAPI_OpenEvent ( $sEvent [, $iAccess = $EVENT_ALL_ACCESS [, $bInherit = False]] )",
        [
            "$sEvent": "The name of the event to be opened",
            "$iAccess": "**[optional]** The access to the event object",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenFileById" => "Opens the file that matches the specified identifier",
        "_WinAPI_OpenFileById ( $hFile, $vID [, $iAccess = 0 [, $iShare = 0 [, $iFlags = 0]]] )",
        [
            "$hFile": "A handle to any file on a volume or share on which the file to be opened is stored",
            "$vID": "The object identifier or the file reference number of the file to be opened",
            "$iAccess": "**[optional]** The access to the object",
            "$iShare": "**[optional]** The sharing mode of the object",
            "$iFlags": "**[optional]** The file flags",
        ];

    "_WinAPI_OpenFileDlg" => "Creates a dialog box that lets the user specify the drive, directory, and the name of a file or set of files to be opened",
        "_WinAPI_OpenFileDlg ( [$sTitle = '' [, $sInitDir = '' [, $sFilters = '' [, $iDefaultFilter = 0 [, $sDefaultFilePath = '' [, $sDefaultExt = '' [, $iFlags = 0 [, $iFlagsEx = 0 [, $pOFNProc = 0 [, $pData = 0 [, $hParent = 0]]]]]]]]]]] )",
        [
            "$sTitle": "**[optional]** The title of the dialog box",
            "$sInitDir": "**[optional]** The initial directory",
            "$sFilters": "**[optional]** The filter strings, e.g. \"Text (*.txt)|All files (*.*)\"",
            "$iDefaultFilter": "**[optional]** The index of the currently selected filter",
            "$sDefaultFilePath": "**[optional]** The file name used to initialize the file name edit control",
            "$sDefaultExt": "**[optional]** The default extension",
            "$iFlags": "**[optional]** The flags used to initialize the dialog box",
            "$iFlagsEx": "**[optional]** The extended flags used to initialize the dialog box",
            "$pOFNProc": "**[optional]** A pointer to a hook procedure",
            "$pData": "**[optional]** Application-defined data that the system passes to the hook procedure",
            "$hParent": "**[optional]** Handle to the window that owns the dialog box",
        ];

    "_WinAPI_OpenFileMapping" => "Opens a named file mapping object",
        "_WinAPI_OpenFileMapping ( $sName [, $iAccess = 0x0006 [, $bInherit = False]] )",
        [
            "$sName": "The name of the file mapping object to be opened",
            "$iAccess": "**[optional]** The access to the file mapping object",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenIcon" => "Restores a minimized (iconic) window to its previous size and position",
        "_WinAPI_OpenIcon ( $hWnd )",
        [
            "$hWnd": "Handle to the window to be restored",
        ];

    "_WinAPI_OpenInputDesktop" => "Opens the desktop that receives user input",
        "_WinAPI_OpenInputDesktop ( [$iAccess = 0 [, $iFlags = 0 [, $bInherit = False]]] )",
        [
            "$iAccess": "**[optional]** The access to the desktop",
            "$iFlags": "**[optional]** The flag that allows processes running in other accounts on the desktop to set hooks",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenJobObject" => "Opens an existing job object",
        "_WinAPI_OpenJobObject ( $sName [, $iAccess = $JOB_OBJECT_ALL_ACCESS [, $bInherit = False]] )",
        [
            "$sName": "The name of the job to be opened",
            "$iAccess": "**[optional]** The access to the job object",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenMutex" => "Opens an existing named mutex object",
        "_WinAPI_OpenMutex ( $sMutex [, $iAccess = $MUTEX_ALL_ACCESS [, $bInherit = False]] )",
        [
            "$sMutex": "The name of the mutex to be opened",
            "$iAccess": "**[optional]** The access to the mutex object",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenProcess" => "Returns a handle of an existing process object",
        "_WinAPI_OpenProcess ( $iAccess, $bInherit, $iPID [, $bDebugPriv = False] )",
        [
            "$iAccess": "Specifies the access to the process object, e.g. $PROCESS_ALL_ACCESS, $PROCESS_QUERY_INFORMATION, $PROCESS_VM_READ or $PROCESS_VM_WRITE",
            "$bInherit": "Specifies whether the returned handle can be inherited",
            "$iPID": "Specifies the process identifier of the process to open",
            "$bDebugPriv": "**[optional]** Certain system processes can not be opened unless you have the debug security privilege. If True, this function will attempt to open the process with debug privileges if the process can not be opened with standard access privileges.",
        ];

    "_WinAPI_OpenProcessToken" => "Opens the access token associated with a process",
        "_WinAPI_OpenProcessToken ( $iAccess [, $hProcess = 0] )",
        [
            "$iAccess": "Access mask that specifies the requested types of access to the access token, e.g. $TOKEN_ADJUST_PRIVILEGES, $TOKEN_QUERY or $TOKEN_DUPLICATE",
            "$hProcess": "**[optional]** Handle to the process whose access token is opened. If 0, the current process is used.",
        ];

    "_WinAPI_OpenSemaphore" => "Opens an existing named semaphore object",
        "_WinAPI_OpenSemaphore ( $sSemaphore [, $iAccess = $SEMAPHORE_ALL_ACCESS [, $bInherit = False]] )",
        [
            "$sSemaphore": "The name of the semaphore to be opened",
            "$iAccess": "**[optional]** The access to the semaphore object",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenThemeData" => "Opens the theme data for a window and its associated class",
        "_WinAPI_OpenThemeData ( $hWnd, $sClass )",
        [
            "$hWnd": "Handle to the window for which theme data is required",
            "$sClass": "A semicolon-separated list of classes",
        ];

    "_WinAPI_OpenThread" => "Opens an existing thread object",
        "_WinAPI_OpenThread ( $iAccess, $bInherit, $iThreadId )",
        [
            "$iAccess": "The access to the thread object",
            "$bInherit": "Specifies whether the returned handle is inherited by a new process",
            "$iThreadId": "The identifier of the thread to be opened",
        ];

    "_WinAPI_OpenThreadToken" => "Opens the access token associated with a thread",
        "_WinAPI_OpenThreadToken ( $iAccess [, $hThread = 0 [, $bOpenAsSelf = False]] )",
        [
            "$iAccess": "Access mask that specifies the requested types of access to the access token",
            "$hThread": "**[optional]** Handle to the thread whose access token is opened. If 0, the current thread is used.",
            "$bOpenAsSelf": "**[optional]** Specifies whether the access check is to be made against the process-level security context",
        ];

    "_WinAPI_OpenThreadTokenEx" => "Opens the access token associated with a thread, impersonating the client's security context if necessary",
        "_WinAPI_OpenThreadTokenEx ( $iAccess [, $iLevel = $SECURITYIMPERSONATION [, $hThread = 0 [, $bOpenAsSelf = False]]] )",
        [
            "$iAccess": "Access mask that specifies the requested types of access to the access token",
            "$iLevel": "**[optional]** The impersonation level",
            "$hThread": "**[optional]** Handle to the thread whose access token is opened. If 0, the current thread is used.",
            "$bOpenAsSelf": "**[optional]** Specifies whether the access check is to be made against the process-level security context",
        ];

    "_WinAPI_OpenWaitableTimer" => "Opens an existing named waitable timer object",
        "_WinAPI_OpenWaitableTimer ( $sTimer [, $iAccess = $TIMER_ALL_ACCESS [, $bInherit = False]] )",
        [
            "$sTimer": "The name of the timer object",
            "$iAccess": "**[optional]** The access to the timer object",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_OpenWindowStation" => "Opens the specified window station",
        "_WinAPI_OpenWindowStation ( [$sName = 'WinSta0' [, $iAccess = 0 [, $bInherit = False]]] )",
        [
            "$sName": "**[optional]** The name of the window station to be opened",
            "$iAccess": "**[optional]** The access to the window station",
            "$bInherit": "**[optional]** Specifies whether the returned handle is inherited by a new process",
        ];

    "_WinAPI_PageSetupDlg" => "Creates a Page Setup dialog box that enables the user to specify the attributes of a printed page",
        "_WinAPI_PageSetupDlg ( ByRef $tPAGESETUPDLG )",
        [
            "$tPAGESETUPDLG": "$tagPAGESETUPDLG structure that contains information used to initialize the dialog box",
        ];

    "_WinAPI_PaintDesktop" => "Fills the clipping region in the specified device context with the desktop pattern or wallpaper",
        "_WinAPI_PaintDesktop ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_PaintRgn" => "Paints the specified region by using the brush currently selected into the device context",
        "_WinAPI_PaintRgn ( $hDC, $hRgn )",
        [
            "$hDC": "Handle to the device context",
            "$hRgn": "Handle to the region to be filled",
        ];

    "_WinAPI_PatBlt" => "Paints the specified rectangle using the brush that is currently selected into the specified device context",
        "_WinAPI_PatBlt ( $hDC, $iX, $iY, $iWidth, $iHeight, $iRop )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in logical units, of the upper-left corner of the rectangle to be filled",
            "$iY": "The y-coordinate, in logical units, of the upper-left corner of the rectangle to be filled",
            "$iWidth": "The width, in logical units, of the rectangle",
            "$iHeight": "The height, in logical units, of the rectangle",
            "$iRop": "The raster operation code, e.g. $PATCOPY, $PATINVERT, $DSTINVERT, $BLACKNESS or $WHITENESS",
        ];

    "_WinAPI_PathAddBackslash" => "Adds a backslash to the end of a string to create the correct syntax for a path",
        "_WinAPI_PathAddBackslash ( $sFilePath )",
        [
            "$sFilePath": "The path to which the backslash is appended",
        ];

    "_WinAPI_PathAddExtension" => "Adds a file name extension to a path string",
        "_WinAPI_PathAddExtension ( $sFilePath [, $sExt = ''] )",
        [
            "$sFilePath": "The path to which the file name extension is appended",
            "$sExt": "**[optional]** The file name extension. If an empty string, \".exe\" is added.",
        ];

    "_WinAPI_PathAppend" => "Appends one path to the end of another",
        "_WinAPI_PathAppend ( $sFilePath, $sMore )",
        [
            "$sFilePath": "The path to which the path in $sMore is appended",
            "$sMore": "The path to be appended",
        ];

    "_WinAPI_PathBuildRoot" => "Creates a root path from a given drive number",
        "_WinAPI_PathBuildRoot ( $iDrive )",
        [
            "$iDrive": "The desired drive number. It should be between 0 and 25.",
        ];

    "_WinAPI_PathCanonicalize" => "Removes elements of a file path according to special strings inserted into that path",
        "_WinAPI_PathCanonicalize ( $sFilePath )",
        [
            "$sFilePath": "The path to be canonicalized",
        ];

    "_WinAPI_PathCommonPrefix" => "Compares two paths to determine if they share a common prefix",
        "_WinAPI_PathCommonPrefix ( $sPath1, $sPath2 )",
        [
            "$sPath1": "The first path name",
            "$sPath2": "The second path name",
        ];

    "_WinAPI_PathCompactPath" => "Truncates a file path to fit within a given pixel width by replacing path components with ellipses",
        "_WinAPI_PathCompactPath ( $hWnd, $sFilePath [, $iWidth = 0] )",
        [
            "$hWnd": "Handle to the window whose font is used for measuring",
            "$sFilePath": "The path to be modified",
            "$iWidth": "**[optional]** The width, in pixels, in which the string must fit. If 0, the width of the client area is used.",
        ];

    "_WinAPI_PathCompactPathEx" => "Truncates a path to fit within a certain number of characters by replacing path components with ellipses",
        "_WinAPI_PathCompactPathEx ( $sFilePath, $iMax )",
        [
            "$sFilePath": "The path to be altered",
            "$iMax": "The maximum number of characters to be contained in the new string",
        ];

    "_WinAPI_PathCreateFromUrl" => "Converts a file URL to a Microsoft MS-DOS path",
        "_WinAPI_PathCreateFromUrl ( $sUrl )",
        [
            "$sUrl": "The URL",
        ];

    "_WinAPI_PathFindExtension" => "Searches a path for an extension",
        "_WinAPI_PathFindExtension ( $sFilePath )",
        [
            "$sFilePath": "The path to search, including the extension being searched for",
        ];

    "_WinAPI_PathFindFileName" => "Searches a path for a file name",
        "_WinAPI_PathFindFileName ( $sFilePath )",
        [
            "$sFilePath": "The path to search",
        ];

    "_WinAPI_PathFindNextComponent" => "Parses a path and returns the portion of that path that follows the first backslash",
        "_WinAPI_PathFindNextComponent ( $sFilePath )",
        [
            "$sFilePath": "The path to parse",
        ];

    "_WinAPI_PathFindOnPath" => "Searches for a file",
        "_WinAPI_PathFindOnPath ( Const $sFilePath [, $aExtraPaths = \"\" [, Const $sPathDelimiter = @LF]] )",
        [
            "$sFilePath": "The file name for which to search",
            "$aExtraPaths": "**[optional]** An array of directories or a delimited string of directories to be searched first",
            "$sPathDelimiter": "**[optional]** The delimiter used if $aExtraPaths is a string",
        ];

    "_WinAPI_PathGetArgs" => "Finds the command line arguments within a given path",
        "_WinAPI_PathGetArgs ( $sFilePath )",
        [
            "$sFilePath": "The path to be searched",
        ];

    "_WinAPI_PathGetCharType" => "Determines the type of character in relation to a path",
        "_WinAPI_PathGetCharType ( $sChar )",
        [
            "$sChar": "The character for which to determine the type",
        ];

    "_WinAPI_PathGetDriveNumber" => "Searches a path for a drive letter within the range of 'A' to 'Z' and returns the corresponding drive number",
        "_WinAPI_PathGetDriveNumber ( $sFilePath )",
        [
            "$sFilePath": "The path to be searched",
        ];

    "_WinAPI_PathIsContentType" => "Determines if a file's registered content type matches the specified content type",
        "_WinAPI_PathIsContentType ( $sFilePath, $sType )",
        [
            "$sFilePath": "The file whose content type is to be compared",
            "$sType": "The content type string to which the file's registered content type will be compared",
        ];

    "_WinAPI_PathIsDirectory" => "Verifies that a path is a valid directory",
        "_WinAPI_PathIsDirectory ( $sFilePath )",
        [
            "$sFilePath": "The path to verify",
        ];

    "_WinAPI_PathIsDirectoryEmpty" => "Determines whether a specified path is an empty directory",
        "_WinAPI_PathIsDirectoryEmpty ( $sFilePath )",
        [
            "$sFilePath": "The path to be tested",
        ];

    "_WinAPI_PathIsExe" => "Determines whether a file is an executable by examining the file name extension",
        "_WinAPI_PathIsExe ( $sFilePath )",
        [
            "$sFilePath": "The path to be tested",
        ];

    "_WinAPI_PathIsFileSpec" => "Searches a path for any path-delimiting characters",
        "_WinAPI_PathIsFileSpec ( $sFilePath )",
        [
            "$sFilePath": "The path to be searched",
        ];

    "_WinAPI_PathIsLFNFileSpec" => "Determines whether a file name is in long format",
        "_WinAPI_PathIsLFNFileSpec ( $sFilePath )",
        [
            "$sFilePath": "The file name to be tested",
        ];

    "_WinAPI_PathIsRelative" => "Searches a path and determines if it is relative",
        "_WinAPI_PathIsRelative ( $sFilePath )",
        [
            "$sFilePath": "The path to search",
        ];

    "_WinAPI_PathIsRoot" => "Parses a path to determine if it is a directory root",
        "_WinAPI_PathIsRoot ( $sFilePath )",
        [
            "$sFilePath": "The path to be validated",
        ];

    "_WinAPI_PathIsSameRoot" => "Compares two paths to determine if they have a common root component",
        "_WinAPI_PathIsSameRoot ( $sPath1, $sPath2 )",
        [
            "$sPath1": "The first path to be compared",
            "$sPath2": "The second path to be compared",
        ];

    "_WinAPI_PathIsSystemFolder" => "Determines if an existing folder contains the attributes that make it a system folder",
        "_WinAPI_PathIsSystemFolder ( $sFilePath )",
        [
            "$sFilePath": "The name of an existing folder",
        ];

    "_WinAPI_PathIsUNC" => "Determines if a path string is a valid Universal Naming Convention (UNC) path",
        "_WinAPI_PathIsUNC ( $sFilePath )",
        [
            "$sFilePath": "The path to validate",
        ];

    "_WinAPI_PathIsUNCServer" => "Determines if a string is a valid Universal Naming Convention (UNC) for a server path only",
        "_WinAPI_PathIsUNCServer ( $sFilePath )",
        [
            "$sFilePath": "The path to validate",
        ];

    "_WinAPI_PathIsUNCServerShare" => "Determines if a string is a valid Universal Naming Convention (UNC) share path",
        "_WinAPI_PathIsUNCServerShare ( $sFilePath )",
        [
            "$sFilePath": "The path to validate",
        ];

    "_WinAPI_PathIsURL" => "Tests a given string to determine if it conforms to a valid URL format",
        "_WinAPI_PathIsURL ( $sUrl )",
        [
            "$sUrl": "The URL to test",
        ];

    "_WinAPI_PathMakeSystemFolder" => "Gives an existing folder the proper attributes to become a system folder",
        "_WinAPI_PathMakeSystemFolder ( $sFilePath )",
        [
            "$sFilePath": "The name of an existing folder",
        ];

    "_WinAPI_PathMatchSpec" => "Searches a string using a Microsoft MS-DOS wildcard match type",
        "_WinAPI_PathMatchSpec ( $sFilePath, $sSpec )",
        [
            "$sFilePath": "The path to be searched",
            "$sSpec": "The file type for which to search, e.g. \"*.txt\"",
        ];

    "_WinAPI_PathParseIconLocation" => "Parses a file location string that contains a file location and icon index",
        "_WinAPI_PathParseIconLocation ( $sFilePath )",
        [
            "$sFilePath": "The file location string, e.g. \"C:\\Windows\\System32\\shell32.dll,3\"",
        ];

    "_WinAPI_PathQuoteSpaces" => "Searches a path for spaces and, if spaces are found, surrounds the entire path with quotation marks",
        "_WinAPI_PathQuoteSpaces ( $sFilePath )",
        [
            "$sFilePath": "The path to search",
        ];

    "_WinAPI_PathRelativePathTo" => "Creates a relative path from one file or folder to another",
        "_WinAPI_PathRelativePathTo ( $sPathFrom, $bDirFrom, $sPathTo, $bDirTo )",
        [
            "$sPathFrom": "The path that defines the start of the relative path",
            "$bDirFrom": "Specifies whether $sPathFrom is a directory",
            "$sPathTo": "The path that defines the endpoint of the relative path",
            "$bDirTo": "Specifies whether $sPathTo is a directory",
        ];

    "_WinAPI_PathRemoveArgs" => "Removes any arguments from a given path",
        "_WinAPI_PathRemoveArgs ( $sFilePath )",
        [
            "$sFilePath": "The path from which to remove arguments",
        ];

    "_WinAPI_PathRemoveBackslash" => "Removes the trailing backslash from a given path",
        "_WinAPI_PathRemoveBackslash ( $sFilePath )",
        [
            "$sFilePath": "The path from which to remove the backslash",
        ];

    "_WinAPI_PathRemoveExtension" => "Removes the file name extension from a path, if one is present",
        "_WinAPI_PathRemoveExtension ( $sFilePath )",
        [
            "$sFilePath": "The path from which to remove the extension",
        ];

    "_WinAPI_PathRemoveFileSpec" => "Removes the trailing file name and backslash from a path, if they are present",
        "_WinAPI_PathRemoveFileSpec ( $sFilePath )",
        [
            "$sFilePath": "The path from which to remove the file name",
        ];

    "_WinAPI_PathRenameExtension" => "Replaces the extension of a file name with a new extension",
        "_WinAPI_PathRenameExtension ( $sFilePath, $sExt )",
        [
            "$sFilePath": "The path in which to replace the extension",
            "$sExt": "The new file name extension, preceded by a period (.) character",
        ];

    "_WinAPI_PathSearchAndQualify" => "Determines if a given path is correctly formatted and fully qualified",
        "_WinAPI_PathSearchAndQualify ( $sFilePath [, $bExists = False] )",
        [
            "$sFilePath": "The path to search",
            "$bExists": "**[optional]** Specifies whether to return the path only if it exists",
        ];

    "_WinAPI_PathSkipRoot" => "Parses a path, ignoring the drive letter or Universal Naming Convention (UNC) server/share path elements",
        "_WinAPI_PathSkipRoot ( $sFilePath )",
        [
            "$sFilePath": "The path that specifies the full path to parse",
        ];

    "_WinAPI_PathStripPath" => "Removes the path portion of a fully qualified path and file",
        "_WinAPI_PathStripPath ( $sFilePath )",
        [
            "$sFilePath": "The path and file name to strip",
        ];

    "_WinAPI_PathStripToRoot" => "Removes all parts of the path except for the root information",
        "_WinAPI_PathStripToRoot ( $sFilePath )",
        [
            "$sFilePath": "The path to be converted",
        ];

    "_WinAPI_PathToRegion" => "Creates a region from the path that is selected into the specified device context",
        "_WinAPI_PathToRegion ( $hDC )",
        [
            "$hDC": "Handle to a device context that contains a closed path",
        ];

    "_WinAPI_PathUndecorate" => "Removes the decoration from a path string",
        "_WinAPI_PathUndecorate ( $sFilePath )",
        [
            "$sFilePath": "The path to undecorate",
        ];

    "_WinAPI_PathUnExpandEnvStrings" => "Replaces folder names in a fully-qualified path with their associated environment string",
        "_WinAPI_PathUnExpandEnvStrings ( $sFilePath )",
        [
            "$sFilePath": "The path to be unexpanded",
        ];

    "_WinAPI_PathUnmakeSystemFolder" => "Removes the attributes from a folder that make it a system folder",
        "_WinAPI_PathUnmakeSystemFolder ( $sFilePath )",
        [
            "$sFilePath": "The name of an existing folder",
        ];

    "_WinAPI_PathUnquoteSpaces" => "Removes quotes from the beginning and end of a path",
        "_WinAPI_PathUnquoteSpaces ( $sFilePath )",
        [
            "$sFilePath": "The path to unquote",
        ];

    "_WinAPI_PathYetAnotherMakeUniqueName" => "Creates a unique filename based on an existing filename",
        "_WinAPI_PathYetAnotherMakeUniqueName ( $sFilePath )",
        [
            "$sFilePath": "The full path of the file",
        ];

    "_WinAPI_PickIconDlg" => "Displays a dialog box that allows the user to choose an icon",
        "_WinAPI_PickIconDlg ( [$sIcon = '' [, $iIndex = 0 [, $hParent = 0]]] )",
        [
            "$sIcon": "**[optional]** The full path of the file that contains the initial icon",
            "$iIndex": "**[optional]** The index of the initial icon",
            "$hParent": "**[optional]** Handle to the parent window",
        ];

    "_WinAPI_PlayEnhMetaFile" => "Displays the picture stored in the specified enhanced-format metafile",
        "_WinAPI_PlayEnhMetaFile ( $hDC, $hEmf, ByRef $tRECT )",
        [
            "$hDC": "Handle to the device context for the output device on which the picture will appear",
            "$hEmf": "Handle to the enhanced metafile",
            "$tRECT": "$tagRECT structure that contains the coordinates of the bounding rectangle used to display the picture",
        ];

    "_WinAPI_PlaySound" => "Plays a sound specified by the given file name, resource, or system event",
        "_WinAPI_PlaySound ( $sSound [, $iFlags = $SND_SYSTEM_NOSTOP [, $hInstance = 0]] )",
        [
            "$sSound": "The sound to play: a file name, a resource identifier or a system event alias",
            "$iFlags": "**[optional]** Flags for playing the sound, e.g. $SND_ASYNC, $SND_FILENAME, $SND_LOOP, $SND_NODEFAULT or $SND_SYNC",
            "$hInstance": "**[optional]** Handle to the executable file that contains the resource to be loaded",
        ];

    "_WinAPI_PlgBlt" => "Performs a bit-block transfer of color data from a rectangle in the source device context to a parallelogram in the destination device context",
        "_WinAPI_PlgBlt ( $hDestDC, Const ByRef $aPoint, $hSrcDC, $iXSrc, $iYSrc, $iWidth, $iHeight [, $hMask = 0 [, $iXMask = 0 [, $iYMask = 0]]] )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$aPoint": "The 2D array ([x1, y1], [x2, y2], [x3, y3]) that identifies three corners of the destination parallelogram",
            "$hSrcDC": "Handle to the source device context",
            "$iXSrc": "The x-coordinate, in logical units, of the upper-left corner of the source rectangle",
            "$iYSrc": "The y-coordinate, in logical units, of the upper-left corner of the source rectangle",
            "$iWidth": "The width, in logical units, of the source rectangle",
            "$iHeight": "The height, in logical units, of the source rectangle",
            "$hMask": "**[optional]** Handle to an optional monochrome bitmap that is used to mask the colors of the source rectangle",
            "$iXMask": "**[optional]** The x-coordinate, in logical units, of the upper-left corner of the monochrome bitmap",
            "$iYMask": "**[optional]** The y-coordinate, in logical units, of the upper-left corner of the monochrome bitmap",
        ];

    "_WinAPI_PointFromRect" => "Returns the top left or center coordinates of a rectangle as a $tagPOINT structure",
        "_WinAPI_PointFromRect ( ByRef $tRect [, $bCenter = True] )",
        [
            "$tRect": "$tagRECT structure",
            "$bCenter": "**[optional]** Specifies whether to return the center point:\n    True - The center point is returned\n    False - The upper left point is returned",
        ];

    "_WinAPI_PolyBezier" => "Draws one or more Bezier curves",
        "_WinAPI_PolyBezier ( $hDC, Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$hDC": "Handle to the device context",
            "$aPoint": "The 2D array ([x1, y1], [x2, y2], ... [xN, yN]) that contains the endpoints and control points of the curves",
            "$iStart": "**[optional]** The index of array to start drawing at",
            "$iEnd": "**[optional]** The index of array to stop drawing at",
        ];

    "_WinAPI_PolyBezierTo" => "Draws one or more Bezier curves and updates the current position",
        "_WinAPI_PolyBezierTo ( $hDC, Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$hDC": "Handle to the device context",
            "$aPoint": "The 2D array ([x1, y1], [x2, y2], ... [xN, yN]) that contains the endpoints and control points",
            "$iStart": "**[optional]** The index of array to start drawing at",
            "$iEnd": "**[optional]** The index of array to stop drawing at",
        ];

    "_WinAPI_PolyDraw" => "Draws a set of line segments and Bezier curves",
        "_WinAPI_PolyDraw ( $hDC, Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$hDC": "Handle to the device context",
            "$aPoint": "The 2D array ([x1, y1, type1], [x2, y2, type2], ... [xN, yN, typeN]) that contains the points and their types",
            "$iStart": "**[optional]** The index of array to start drawing at",
            "$iEnd": "**[optional]** The index of array to stop drawing at",
        ];

    "_WinAPI_Polygon" => "Draws a polygon consisting of two or more vertices connected by straight lines",
        "_WinAPI_Polygon ( $hDC, Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$hDC": "Handle to the device context",
            "$aPoint": "The 2D array ([x1, y1], [x2, y2], ... [xN, yN]) that contains the vertices of the polygon",
            "$iStart": "**[optional]** The index of array to start drawing at",
            "$iEnd": "**[optional]** The index of array to stop drawing at",
        ];

    "_WinAPI_PolyPolygon" => "Draws a series of closed polygons",
        "_WinAPI_PolyPolygon ( $hDC, Const ByRef $aPoint [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$hDC": "Handle to the device context",
            "$aPoint": "The 2D array that contains the vertices of the polygons, with polygon boundaries marked by a count row",
            "$iStart": "**[optional]** The index of array to start drawing at",
            "$iEnd": "**[optional]** The index of array to stop drawing at",
        ];

    "_WinAPI_PostMessage" => "Places a message in the message queue and then returns",
        "_WinAPI_PostMessage ( $hWnd, $iMsg, $wParam, $lParam )",
        [
            "$hWnd": "Identifies the window whose window procedure will receive the message. If this parameter is 0xFFFF (HWND_BROADCAST), the message is sent to all top-level windows in the system.",
            "$iMsg": "Specifies the message to be sent",
            "$wParam": "First message parameter",
            "$lParam": "Second message parameter",
        ];

    "_WinAPI_PostThreadMessage" => "Posts a message to the message queue of the specified thread",
        "_WinAPI_PostThreadMessage ( $iThreadId, $iMsg, $wParam, $lParam )",
        [
            "$iThreadId": "The identifier of the thread to which the message is to be posted",
            "$iMsg": "The type of message to be posted",
            "$wParam": "Additional message-specific information",
            "$lParam": "Additional message-specific information",
        ];

    "_WinAPI_PRIMARYLANGID" => "Extracts a primary language identifier from a language identifier",
        "_WinAPI_PRIMARYLANGID ( $iLngID )",
        [
            "$iLngID": "Language identifier",
        ];

    "_WinAPI_PrintDlg" => "Displays a Print dialog box",
        "_WinAPI_PrintDlg ( ByRef $tPRINTDLG )",
        [
            "$tPRINTDLG": "$tagPRINTDLG structure that contains information used to initialize the dialog box",
        ];

    "_WinAPI_PrintDlgEx" => "Displays a Print property sheet that enables the user to specify the properties of a particular print job",
        "_WinAPI_PrintDlgEx ( ByRef $tPRINTDLGEX )",
        [
            "$tPRINTDLGEX": "$tagPRINTDLGEX structure that contains information used to initialize the property sheet",
        ];

    "_WinAPI_ProgIDFromCLSID" => "Retrieves the ProgID for a given CLSID",
        "_WinAPI_ProgIDFromCLSID ( $sCLSID )",
        [
            "$sCLSID": "The CLSID for which the ProgID is to be requested",
        ];

    "_WinAPI_PtInRect" => "Determines whether the specified point lies within the specified rectangle",
        "_WinAPI_PtInRect ( ByRef $tRECT, ByRef $tPoint )",
        [
            "$tRECT": "$tagRECT structure that contains the specified rectangle",
            "$tPoint": "$tagPOINT structure that contains the specified point",
        ];

    "_WinAPI_PtInRectEx" => "Determines whether the specified point lies within the specified rectangle",
        "_WinAPI_PtInRectEx ( $iX, $iY, $iLeft, $iTop, $iRight, $iBottom )",
        [
            "$iX": "The x-coordinate of the point",
            "$iY": "The y-coordinate of the point",
            "$iLeft": "The x-coordinate of the upper-left corner of the rectangle",
            "$iTop": "The y-coordinate of the upper-left corner of the rectangle",
            "$iRight": "The x-coordinate of the lower-right corner of the rectangle",
            "$iBottom": "The y-coordinate of the lower-right corner of the rectangle",
        ];

    "_WinAPI_PtInRegion" => "Determines whether the specified point is inside the specified region",
        "_WinAPI_PtInRegion ( $hRgn, $iX, $iY )",
        [
            "$hRgn": "Handle to the region to be examined",
            "$iX": "The x-coordinate of the point in logical units",
            "$iY": "The y-coordinate of the point in logical units",
        ];

    "_WinAPI_PtVisible" => "Determines whether the specified point is within the clipping region of a device context",
        "_WinAPI_PtVisible ( $hDC, $iX, $iY )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in logical units, of the point",
            "$iY": "The y-coordinate, in logical units, of the point",
        ];

    "_WinAPI_QueryDosDevice" => "Retrieves information about MS-DOS device names",
        "_WinAPI_QueryDosDevice ( $sDevice )",
        [
            "$sDevice": "The MS-DOS device name string specifying the target of the query",
        ];

    "_WinAPI_QueryInformationJobObject" => "Retrieves limit and job state information from the job object",
        "_WinAPI_QueryInformationJobObject ( $hJob, $iJobObjectInfoClass, ByRef $tJobObjectInfo )",
        [
            "$hJob": "Handle to the job whose information is being queried",
            "$iJobObjectInfoClass": "The information class for the limits to be queried",
            "$tJobObjectInfo": "The structure that receives the limit or job state information",
        ];

    "_WinAPI_QueryPerformanceCounter" => "Retrieves the current value of the high-resolution performance counter",
        "_WinAPI_QueryPerformanceCounter ( )",
        [];

    "_WinAPI_QueryPerformanceFrequency" => "Retrieves the frequency of the high-resolution performance counter",
        "_WinAPI_QueryPerformanceFrequency ( )",
        [];

    "_WinAPI_RadialGradientFill" => "Fills radial gradient",
        "_WinAPI_RadialGradientFill ( $hDC, $iX, $iY, $iRadius, $iRGB1, $iRGB2 [, $fAngleStart = 0 [, $fAngleEnd = 360 [, $fStep = 5]]] )",
        [
            "$hDC": "Handle to the destination device context",
            "$iX": "The x-coordinate of the center, in logical units",
            "$iY": "The y-coordinate of the center, in logical units",
            "$iRadius": "The circle radius to filling the gradient",
            "$iRGB1": "The color information at the center",
            "$iRGB2": "The color information at the edge",
            "$fAngleStart": "**[optional]** The start angle to filling the gradient, in degrees",
            "$fAngleEnd": "**[optional]** The end angle to filling the gradient, in degrees",
            "$fStep": "**[optional]** The gradient filling step, in degrees",
        ];

    "_WinAPI_ReadDirectoryChanges" => "Retrieves information that describes the changes within the specified directory",
        "_WinAPI_ReadDirectoryChanges ( $hDirectory, $iFilter, $pBuffer, $iLength [, $bSubtree = 0] )",
        [
            "$hDirectory": "Handle to the directory to be monitored",
            "$iFilter": "The filter criteria that the function checks to determine if the wait operation has completed",
            "$pBuffer": "A pointer to the buffer that receives the read results",
            "$iLength": "The size of the buffer, in bytes",
            "$bSubtree": "**[optional]** Specifies whether to monitor the directory tree rooted at the specified directory",
        ];

    "_WinAPI_ReadFile" => "Reads data from a file",
        "_WinAPI_ReadFile ( $hFile, $pBuffer, $iToRead, ByRef $iRead [, $tOverlapped = 0] )",
        [
            "$hFile": "Handle to the file to be read",
            "$pBuffer": "Pointer to the buffer that receives the data read from a file",
            "$iToRead": "Maximum number of bytes to read",
            "$iRead": "Number of bytes read",
            "$tOverlapped": "**[optional]** a $tagOVERLAPPED structure or a pointer to it",
        ];

    "_WinAPI_ReadProcessMemory" => "Reads memory in a specified process",
        "_WinAPI_ReadProcessMemory ( $hProcess, $pBaseAddress, $pBuffer, $iSize, ByRef $iRead )",
        [
            "$hProcess": "Identifies an open handle of a process whose memory is read",
            "$pBaseAddress": "Points to the base address in the specified process to be read",
            "$pBuffer": "Points to a buffer that receives the contents from the address space",
            "$iSize": "Specifies the requested number of bytes to read from the specified process",
            "$iRead": "The actual number of bytes transferred into the specified buffer",
        ];

    "_WinAPI_Rectangle" => "Draws a rectangle",
        "_WinAPI_Rectangle ( $hDC, $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
        ];

    "_WinAPI_RectInRegion" => "Determines whether any part of the specified rectangle is within the boundaries of a region",
        "_WinAPI_RectInRegion ( $hRgn, $tRECT )",
        [
            "$hRgn": "Handle to the region",
            "$tRECT": "$tagRECT structure that contains the coordinates of the rectangle in logical units",
        ];

    "_WinAPI_RectIsEmpty" => "Determins whether a rectangle is empty",
        "_WinAPI_RectIsEmpty ( ByRef $tRECT )",
        [
            "$tRECT": "$tagRECT structure that contains the coordinates of the rectangle",
        ];

    "_WinAPI_RectVisible" => "Determines whether any part of the specified rectangle lies within the clipping region of a device context",
        "_WinAPI_RectVisible ( $hDC, $tRECT )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the specified rectangle",
        ];

    "_WinAPI_RedrawWindow" => "Updates the specified rectangle or region in a window's client area",
        "_WinAPI_RedrawWindow ( $hWnd [, $tRECT = 0 [, $hRegion = 0 [, $iFlags = 5]]] )",
        [
            "$hWnd": "Handle to a window. If 0, the desktop window is updated.",
            "$tRECT": "**[optional]** $tagRECT structure containing the coordinates of the update rectangle. This parameter is ignored if the $hRegion parameter identifies a region.",
            "$hRegion": "**[optional]** Identifies the update region. If the $hRegion and $tRECT parameters are 0, the entire client area is added to the update region.",
            "$iFlags": "**[optional]** Specifies the redraw flags, e.g. $RDW_ERASE, $RDW_FRAME, $RDW_INTERNALPAINT, $RDW_INVALIDATE, $RDW_NOERASE, $RDW_NOFRAME, $RDW_ALLCHILDREN, $RDW_ERASENOW or $RDW_UPDATENOW",
        ];

    "_WinAPI_RegCloseKey" => "Closes a handle to the specified registry key",
        "_WinAPI_RegCloseKey ( $hKey [, $bFlush = False] )",
        [
            "$hKey": "Handle to the open key to be closed",
            "$bFlush": "**[optional]** Specifies whether to write all the attributes of the key into the registry before closing",
        ];

    "_WinAPI_RegConnectRegistry" => "Establishes a connection to a predefined registry key on another computer",
        "_WinAPI_RegConnectRegistry ( $sComputer, $hKey )",
        [
            "$sComputer": "The name of the remote computer, in the form \"\\\\computername\"",
            "$hKey": "A predefined registry handle, $HKEY_LOCAL_MACHINE, $HKEY_PERFORMANCE_DATA or $HKEY_USERS",
        ];

    "_WinAPI_RegCopyTree" => "Copies the specified registry key, along with its values and subkeys, to the specified destination key",
        "_WinAPI_RegCopyTree ( $hSrcKey, $sSrcSubKey, $hDestKey )",
        [
            "$hSrcKey": "Handle to an open registry key",
            "$sSrcSubKey": "The name of the key to be copied",
            "$hDestKey": "Handle to the destination key",
        ];

    "_WinAPI_RegCopyTreeEx" => "Copies the specified registry key, along with its values and subkeys, to the specified destination key, preserving security information",
        "_WinAPI_RegCopyTreeEx ( $hSrcKey, $sSrcSubKey, $hDestKey )",
        [
            "$hSrcKey": "Handle to an open registry key",
            "$sSrcSubKey": "The name of the key to be copied",
            "$hDestKey": "Handle to the destination key",
        ];

    "_WinAPI_RegCreateKey" => "Creates the specified registry key",
        "_WinAPI_RegCreateKey ( $hKey [, $sSubKey = '' [, $iAccess = 0x000F003F [, $iOptions = 0 [, $tSecurity = 0]]]] )",
        [
            "$hKey": "Handle to an open registry key, or one of the predefined keys such as $HKEY_CURRENT_USER",
            "$sSubKey": "**[optional]** The name of a subkey that this function opens or creates",
            "$iAccess": "**[optional]** The mask that specifies the access rights for the key, e.g. $KEY_READ, $KEY_WRITE or $KEY_ALL_ACCESS",
            "$iOptions": "**[optional]** The options for the key, e.g. $REG_OPTION_NON_VOLATILE or $REG_OPTION_VOLATILE",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that determines whether the returned handle can be inherited by child processes",
        ];

    "_WinAPI_RegDeleteEmptyKey" => "Deletes an empty subkey and its values",
        "_WinAPI_RegDeleteEmptyKey ( $hKey [, $sSubKey = ''] )",
        [
            "$hKey": "Handle to an open registry key",
            "$sSubKey": "**[optional]** The name of the key to be deleted",
        ];

    "_WinAPI_RegDeleteKey" => "Deletes a subkey and its values",
        "_WinAPI_RegDeleteKey ( $hKey [, $sSubKey = ''] )",
        [
            "$hKey": "Handle to an open registry key",
            "$sSubKey": "**[optional]** The name of the key to be deleted",
        ];

    "_WinAPI_RegDeleteKeyValue" => "Removes the specified value from the specified registry key and subkey",
        "_WinAPI_RegDeleteKeyValue ( $hKey, $sSubKey, $sValueName )",
        [
            "$hKey": "Handle to an open registry key",
            "$sSubKey": "The name of a subkey from which the value is removed",
            "$sValueName": "The registry value to be removed from the key",
        ];

    "_WinAPI_RegDeleteTree" => "Deletes the subkeys and values of the specified key recursively",
        "_WinAPI_RegDeleteTree ( $hKey [, $sSubKey = ''] )",
        [
            "$hKey": "Handle to an open registry key",
            "$sSubKey": "**[optional]** The name of the key to be deleted. If an empty string, the subkeys and values of $hKey are deleted.",
        ];

    "_WinAPI_RegDeleteTreeEx" => "Deletes a subkey and all its descendants",
        "_WinAPI_RegDeleteTreeEx ( $hKey [, $sSubKey = ''] )",
        [
            "$hKey": "Handle to an open registry key",
            "$sSubKey": "**[optional]** The name of the key to be deleted",
        ];

    "_WinAPI_RegDeleteValue" => "Removes a named value from the specified registry key",
        "_WinAPI_RegDeleteValue ( $hKey, $sValueName )",
        [
            "$hKey": "Handle to an open registry key",
            "$sValueName": "The registry value to be removed",
        ];

    "_WinAPI_RegDisableReflectionKey" => "Disables registry reflection for the specified key",
        "_WinAPI_RegDisableReflectionKey ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_RegDuplicateHKey" => "Duplicates a registry key's handle",
        "_WinAPI_RegDuplicateHKey ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_RegEnableReflectionKey" => "Restores registry reflection for the specified disabled key",
        "_WinAPI_RegEnableReflectionKey ( $hKey )",
        [
            "$hKey": "Handle to the disabled registry key",
        ];

    "_WinAPI_RegEnumKey" => "Enumerates the subkeys of the specified open registry key",
        "_WinAPI_RegEnumKey ( $hKey, $iIndex )",
        [
            "$hKey": "Handle to an open registry key",
            "$iIndex": "The index of the subkey to retrieve",
        ];

    "_WinAPI_RegEnumValue" => "Enumerates the values for the specified open registry key",
        "_WinAPI_RegEnumValue ( $hKey, $iIndex )",
        [
            "$hKey": "Handle to an open registry key",
            "$iIndex": "The index of the value to be retrieved",
        ];

    "_WinAPI_RegFlushKey" => "Writes all the attributes of the specified open registry key into the registry",
        "_WinAPI_RegFlushKey ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_RegisterApplicationRestart" => "Registers the active instance of an application for restart",
        "_WinAPI_RegisterApplicationRestart ( [$iFlags = 0 [, $sCmd = '']] )",
        [
            "$iFlags": "**[optional]** The flags that specify when the application should not be restarted, e.g. $RESTART_NO_CRASH, $RESTART_NO_HANG, $RESTART_NO_PATCH or $RESTART_NO_REBOOT",
            "$sCmd": "**[optional]** The command-line arguments for the application when it is restarted",
        ];

    "_WinAPI_RegisterClass" => "Registers a window class for subsequent use in calls to the _WinAPI_CreateWindowEx() function",
        "_WinAPI_RegisterClass ( $tWNDCLASS )",
        [
            "$tWNDCLASS": "$tagWNDCLASS structure that contains the window class attributes",
        ];

    "_WinAPI_RegisterClassEx" => "Registers a window class for subsequent use in calls to the _WinAPI_CreateWindowEx() function",
        "_WinAPI_RegisterClassEx ( $sClass, $sMethod [, $hIcon = 0 [, $hCursor = 0 [, $iBkColor = $COLOR_WINDOW [, $iStyle = 0]]]] )",
        [
            "$sClass": "The window class name",
            "$sMethod": "The name of the function that processes messages sent to windows of this class",
            "$hIcon": "**[optional]** Handle to the class icon",
            "$hCursor": "**[optional]** Handle to the class cursor",
            "$iBkColor": "**[optional]** The system color index used for the class background, e.g. $COLOR_WINDOW or $COLOR_BTNFACE",
            "$iStyle": "**[optional]** The class style, e.g. $CS_DBLCLKS, $CS_HREDRAW or $CS_VREDRAW",
        ];

    "_WinAPI_RegisterHotKey" => "Defines a system-wide hot key",
        "_WinAPI_RegisterHotKey ( $hWnd, $iID, $iModifiers, $vKey )",
        [
            "$hWnd": "Handle to the window that will receive $WM_HOTKEY messages generated by the hot key",
            "$iID": "The identifier of the hot key",
            "$iModifiers": "The keys that must be pressed in combination with the key specified by $vKey, e.g. $MOD_ALT, $MOD_CONTROL, $MOD_SHIFT or $MOD_WIN",
            "$vKey": "The virtual-key code of the hot key",
        ];

    "_WinAPI_RegisterPowerSettingNotification" => "Registers the application to receive power setting notifications for the specific power setting event",
        "_WinAPI_RegisterPowerSettingNotification ( $hWnd, $sGUID )",
        [
            "$hWnd": "Handle to the window that will receive the notifications",
            "$sGUID": "The GUID of the power setting for which notifications are to be sent, e.g. $GUID_ACDC_POWER_SOURCE or $GUID_BATTERY_PERCENTAGE_REMAINING",
        ];

    "_WinAPI_RegisterRawInputDevices" => "Registers the devices that supply the raw input data",
        "_WinAPI_RegisterRawInputDevices ( $paDevice [, $iCount = 1] )",
        [
            "$paDevice": "A pointer to an array of $tagRAWINPUTDEVICE structures that represent the devices that supply the raw input",
            "$iCount": "**[optional]** The number of $tagRAWINPUTDEVICE structures pointed to by $paDevice",
        ];

    "_WinAPI_RegisterShellHookWindow" => "Registers a specified Shell window to receive certain messages for events or notifications",
        "_WinAPI_RegisterShellHookWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the window to register for Shell hook messages",
        ];

    "_WinAPI_RegisterWindowMessage" => "Defines a new window message that is guaranteed to be unique throughout the system",
        "_WinAPI_RegisterWindowMessage ( $sMessage )",
        [
            "$sMessage": "String that specifies the message to be registered",
        ];

    "_WinAPI_RegLoadMUIString" => "Loads the specified string from the specified key and subkey",
        "_WinAPI_RegLoadMUIString ( $hKey, $sValueName [, $iFlags = 0 [, $sDirectory = '']] )",
        [
            "$hKey": "Handle to an open registry key",
            "$sValueName": "The name of the registry value",
            "$iFlags": "**[optional]** If this parameter is $REG_MUI_STRING_TRUNCATE, the string is truncated to fit the available size of the buffer",
            "$sDirectory": "**[optional]** The directory path",
        ];

    "_WinAPI_RegNotifyChangeKeyValue" => "Notifies the caller about changes to the attributes or contents of a specified registry key",
        "_WinAPI_RegNotifyChangeKeyValue ( $hKey, $iFilter [, $bSubtree = False [, $bAsync = False [, $hEvent = 0]]] )",
        [
            "$hKey": "Handle to an open registry key",
            "$iFilter": "The value that indicates the changes that should be reported, e.g. $REG_NOTIFY_CHANGE_NAME, $REG_NOTIFY_CHANGE_ATTRIBUTES, $REG_NOTIFY_CHANGE_LAST_SET or $REG_NOTIFY_CHANGE_SECURITY",
            "$bSubtree": "**[optional]** Specifies whether to report changes in the specified key and its subkeys",
            "$bAsync": "**[optional]** Specifies whether to return immediately and report changes by signaling the specified event",
            "$hEvent": "**[optional]** Handle to an event. If $bAsync is True, the function returns immediately and changes are reported by signaling this event.",
        ];

    "_WinAPI_RegOpenKey" => "Opens the specified registry key",
        "_WinAPI_RegOpenKey ( $hKey [, $sSubKey = '' [, $iAccess = 0x000F003F]] )",
        [
            "$hKey": "Handle to an open registry key, or one of the predefined keys such as $HKEY_LOCAL_MACHINE",
            "$sSubKey": "**[optional]** The name of the registry subkey to be opened",
            "$iAccess": "**[optional]** The mask that specifies the desired access rights to the key",
        ];

    "_WinAPI_RegQueryInfoKey" => "Retrieves information about the specified registry key",
        "_WinAPI_RegQueryInfoKey ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_RegQueryLastWriteTime" => "Retrieves information about the last write time to the specified registry key",
        "_WinAPI_RegQueryLastWriteTime ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_RegQueryMultipleValues" => "Retrieves the type and data for a list of value names associated with an open registry key",
        "_WinAPI_RegQueryMultipleValues ( $hKey, ByRef $aValent, ByRef $pBuffer [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$hKey": "Handle to an open registry key",
            "$aValent": "The array of value names to retrieve",
            "$pBuffer": "A pointer to a buffer that receives the data for each value",
            "$iStart": "**[optional]** The index of array to start querying at",
            "$iEnd": "**[optional]** The index of array to stop querying at",
        ];

    "_WinAPI_RegQueryReflectionKey" => "Determines whether reflection has been disabled or enabled for the specified key",
        "_WinAPI_RegQueryReflectionKey ( $hKey )",
        [
            "$hKey": "Handle to an open registry key",
        ];

    "_WinAPI_RegQueryValue" => "Retrieves the type and data for the specified value name associated with an open registry key",
        "_WinAPI_RegQueryValue ( $hKey, $sValueName, ByRef $tValue )",
        [
            "$hKey": "Handle to an open registry key",
            "$sValueName": "The name of the registry value",
            "$tValue": "The structure that receives the value's data",
        ];

    "_WinAPI_RegRestoreKey" => "Reads the registry information in a specified file and copies it over the specified key",
        "_WinAPI_RegRestoreKey ( $hKey, $sFilePath )",
        [
            "$hKey": "Handle to an open registry key",
            "$sFilePath": "The name of the file with the registry information",
        ];

    "_WinAPI_RegSaveKey" => "Saves the specified key and all of its subkeys and values to a new file",
        "_WinAPI_RegSaveKey ( $hKey, $sFilePath [, $bReplace = False [, $tSecurity = 0]] )",
        [
            "$hKey": "Handle to an open registry key",
            "$sFilePath": "The name of the file in which the specified key and subkeys are to be saved",
            "$bReplace": "**[optional]** Specifies whether to replace the existing file",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure that specifies a security descriptor for the new file",
        ];

    "_WinAPI_RegSetValue" => "Sets the data and type of a specified value under a registry key",
        "_WinAPI_RegSetValue ( $hKey, $sValueName, $iType, $tValue, $iBytes )",
        [
            "$hKey": "Handle to an open registry key",
            "$sValueName": "The name of the value to be set",
            "$iType": "The type of data, e.g. $REG_BINARY, $REG_DWORD, $REG_EXPAND_SZ, $REG_MULTI_SZ, $REG_QWORD or $REG_SZ",
            "$tValue": "The structure or pointer to the data to be stored",
            "$iBytes": "The size of the data, in bytes",
        ];

    "_WinAPI_ReleaseCapture" => "Releases the mouse capture from a window in the current thread and restores normal mouse input processing",
        "_WinAPI_ReleaseCapture ( )",
        [];

    "_WinAPI_ReleaseDC" => "Releases a device context",
        "_WinAPI_ReleaseDC ( $hWnd, $hDC )",
        [
            "$hWnd": "Handle of window",
            "$hDC": "Identifies the device context to be released",
        ];

    "_WinAPI_ReleaseMutex" => "Releases ownership of the specified mutex object",
        "_WinAPI_ReleaseMutex ( $hMutex )",
        [
            "$hMutex": "Handle to the mutex object",
        ];

    "_WinAPI_ReleaseSemaphore" => "Increases the count of the specified semaphore object by a specified amount",
        "_WinAPI_ReleaseSemaphore ( $hSemaphore [, $iIncrease = 1] )",
        [
            "$hSemaphore": "Handle to the semaphore object",
            "$iIncrease": "**[optional]** The amount by which the semaphore object's current count is to be increased",
        ];

    "_WinAPI_ReleaseStream" => "Releases a stream object",
        "_WinAPI_ReleaseStream ( $pStream )",
        [
            "$pStream": "Pointer to the IStream interface on the stream object to release",
        ];

    "_WinAPI_RemoveClipboardFormatListener" => "Removes the given window from the system-maintained clipboard format listener list",
        "_WinAPI_RemoveClipboardFormatListener ( $hWnd )",
        [
            "$hWnd": "Handle to the window to remove from the clipboard format listener list",
        ];

    "_WinAPI_RemoveDirectory" => "Deletes an existing empty directory",
        "_WinAPI_RemoveDirectory ( $sDirPath )",
        [
            "$sDirPath": "The path of the directory to be removed",
        ];

    "_WinAPI_RemoveFontMemResourceEx" => "Removes the fonts added from a memory image file",
        "_WinAPI_RemoveFontMemResourceEx ( $hFont )",
        [
            "$hFont": "Handle to the font-resource returned by _WinAPI_AddFontMemResourceEx()",
        ];

    "_WinAPI_RemoveFontResourceEx" => "Removes the fonts in the specified file from the system font table",
        "_WinAPI_RemoveFontResourceEx ( $sFont [, $iFlag = 0 [, $bNotify = False]] )",
        [
            "$sFont": "The name of the font file, or a list of font files separated by \"|\"",
            "$iFlag": "**[optional]** The characteristics of the font to be removed, $FR_NOT_ENUM or $FR_PRIVATE",
            "$bNotify": "**[optional]** Specifies whether to send the $WM_FONTCHANGE message to all top-level windows",
        ];

    "_WinAPI_RemoveProp" => "Removes an entry from the property list of the specified window",
        "_WinAPI_RemoveProp ( $hWnd, $sProp )",
        [
            "$hWnd": "Handle to the window whose property list is to be changed",
            "$sProp": "The property name",
        ];

    "_WinAPI_ReOpenFile" => "Reopens the specified file system object with different access rights, sharing mode, and flags",
        "_WinAPI_ReOpenFile ( $hFile, $iAccess, $iShare [, $iFlags = 0] )",
        [
            "$hFile": "Handle to the object to be reopened",
            "$iAccess": "The required access to the object",
            "$iShare": "The sharing mode of the object",
            "$iFlags": "**[optional]** The file flags",
        ];

    "_WinAPI_ReplaceFile" => "Replaces one file with another file, with the option of creating a backup copy of the original file",
        "_WinAPI_ReplaceFile ( $sReplacedFile, $sReplacementFile [, $sBackupFile = '' [, $iFlags = 0]] )",
        [
            "$sReplacedFile": "The name of the file to be replaced",
            "$sReplacementFile": "The name of the file that will replace the $sReplacedFile file",
            "$sBackupFile": "**[optional]** The name of the file that will serve as a backup copy of the $sReplacedFile file",
            "$iFlags": "**[optional]** The replacement options, e.g. $REPLACEFILE_WRITE_THROUGH or $REPLACEFILE_IGNORE_MERGE_ERRORS",
        ];

    "_WinAPI_ReplaceTextDlg" => "Creates a system-defined modeless dialog box that lets the user specify a string to search for and a replacement string",
        "_WinAPI_ReplaceTextDlg ( $hOwner [, $sFindWhat = '' [, $sReplaceWith = '' [, $iFlags = 0 [, $pReplaceProc = 0 [, $lParam = 0]]]]] )",
        [
            "$hOwner": "Handle to the window that owns the dialog box",
            "$sFindWhat": "**[optional]** The search string that is displayed in the Find what edit control",
            "$sReplaceWith": "**[optional]** The replacement string that is displayed in the Replace with edit control",
            "$iFlags": "**[optional]** The flags that used to initialize the dialog box",
            "$pReplaceProc": "**[optional]** A pointer to a hook procedure",
            "$lParam": "**[optional]** Application-defined data that the system passes to the hook procedure",
        ];

    "_WinAPI_ResetEvent" => "Sets the specified event object to the nonsignaled state",
        "_WinAPI_ResetEvent ( $hEvent )",
        [
            "$hEvent": "Handle to the event object",
        ];

    "_WinAPI_RestartDlg" => "Displays a dialog box that prompts the user to restart Windows",
        "_WinAPI_RestartDlg ( [$sText = '' [, $iFlags = 2 [, $hParent = 0]]] )",
        [
            "$sText": "**[optional]** The text that displays the reason for the shutdown",
            "$iFlags": "**[optional]** The flags that specify the type of shutdown, e.g. $EWX_LOGOFF, $EWX_POWEROFF, $EWX_REBOOT or $EWX_SHUTDOWN",
            "$hParent": "**[optional]** Handle to the parent window",
        ];

    "_WinAPI_RestoreDC" => "Restores a device context to the specified state",
        "_WinAPI_RestoreDC ( $hDC, $iID )",
        [
            "$hDC": "Handle to the device context",
            "$iID": "The saved state to be restored, as returned by _WinAPI_SaveDC(), or a negative relative instance",
        ];

    "_WinAPI_ResumeThread" => "Decrements a thread's suspend count",
        "_WinAPI_ResumeThread ( $hThread )",
        [
            "$hThread": "Handle to the thread to be restarted",
        ];

    "_WinAPI_RGB" => "Creates a RGB color value based on red, green, and blue components",
        "_WinAPI_RGB ( $iRed, $iGreen, $iBlue )",
        [
            "$iRed": "The intensity of the red color",
            "$iGreen": "The intensity of the green color",
            "$iBlue": "The intensity of the blue color",
        ];

    "_WinAPI_RotatePoints" => "Rotates a points from the array by the specified angle",
        "_WinAPI_RotatePoints ( ByRef $aPoint, $iXC, $iYC, $fAngle [, $iStart = 0 [, $iEnd = -1]] )",
        [
            "$aPoint": "The 2D array ([x1, y1, ...], [x2, y2, ...], ... [xN, yN, ...])",
            "$iXC": "The x-coordinate of the center of rotation",
            "$iYC": "The y-coordinate of the center of rotation",
            "$fAngle": "The angle of rotation, in degrees",
            "$iStart": "**[optional]** The index of array to start rotating at",
            "$iEnd": "**[optional]** The index of array to stop rotating at",
        ];

    "_WinAPI_RoundRect" => "Draws a rectangle with rounded corners",
        "_WinAPI_RoundRect ( $hDC, $tRECT, $iWidth, $iHeight )",
        [
            "$hDC": "Handle to the device context",
            "$tRECT": "$tagRECT structure that contains the logical coordinates of the rectangle",
            "$iWidth": "The width, in logical coordinates, of the ellipse used to draw the rounded corners",
            "$iHeight": "The height, in logical coordinates, of the ellipse used to draw the rounded corners",
        ];

    "_WinAPI_SaveDC" => "Saves the current state of the specified device context",
        "_WinAPI_SaveDC ( $hDC )",
        [
            "$hDC": "Handle to the device context whose state is to be saved",
        ];

    "_WinAPI_SaveFileDlg" => "Creates a dialog box that lets the user specify the drive, directory, and name of a file to save",
        "_WinAPI_SaveFileDlg ( [$sTitle = \"\" [, $sInitDir = \"\" [, $sFilters = \"\" [, $iDefaultFilter = 0 [, $sDefaultFilePath = \"\" [, $sDefaultExt = \"\" [, $iFlags = 0 [, $iFlagsEx = 0 [, $pOFNProc = 0 [, $pData = 0 [, $hParent = 0]]]]]]]]]]] )",
        [
            "$sTitle": "**[optional]** The title of the dialog box",
            "$sInitDir": "**[optional]** The initial directory",
            "$sFilters": "**[optional]** The filter strings, e.g. \"Text (*.txt)|All files (*.*)\"",
            "$iDefaultFilter": "**[optional]** The index of the currently selected filter",
            "$sDefaultFilePath": "**[optional]** The file name used to initialize the file name edit control",
            "$sDefaultExt": "**[optional]** The default extension",
            "$iFlags": "**[optional]** The flags used to initialize the dialog box",
            "$iFlagsEx": "**[optional]** The extended flags used to initialize the dialog box",
            "$pOFNProc": "**[optional]** A pointer to a hook procedure",
            "$pData": "**[optional]** Application-defined data that the system passes to the hook procedure",
            "$hParent": "**[optional]** Handle to the window that owns the dialog box",
        ];

    "_WinAPI_SaveHBITMAPToFile" => "Saves a specified bitmap to the specified bitmap (.bmp) file",
        "_WinAPI_SaveHBITMAPToFile ( $sFilePath, $hBitmap [, $iXPelsPerMeter = Default [, $iYPelsPerMeter = Default]] )",
        [
            "$sFilePath": "The name of the .bmp file in which to save the bitmap",
            "$hBitmap": "Handle to the bitmap to be saved",
            "$iXPelsPerMeter": "**[optional]** The horizontal resolution, in pixels-per-meter, of the target device for the bitmap",
            "$iYPelsPerMeter": "**[optional]** The vertical resolution, in pixels-per-meter, of the target device for the bitmap",
        ];

    "_WinAPI_SaveHICONToFile" => "Saves a specified single or multiple icon (HICON) to the specified icon (.ico) file",
        "_WinAPI_SaveHICONToFile ( $sFilePath, Const ByRef $vIcon [, $bCompress = 0 [, $iStart = 0 [, $iEnd = -1]]] )",
        [
            "$sFilePath": "The name of the .ico file in which to save the icon",
            "$vIcon": "Handle to the icon, or an array of icon handles to save",
            "$bCompress": "**[optional]** Specifies whether to use PNG compression for icons larger than 48x48",
            "$iStart": "**[optional]** The index of array to start saving at",
            "$iEnd": "**[optional]** The index of array to stop saving at",
        ];

    "_WinAPI_ScaleWindowExt" => "Modifies the window for a device context using the ratios formed by the specified multiplicands and divisors",
        "_WinAPI_ScaleWindowExt ( $hDC, $iXNum, $iXDenom, $iYNum, $iYDenom )",
        [
            "$hDC": "Handle to the device context",
            "$iXNum": "The amount by which to multiply the current horizontal extent",
            "$iXDenom": "The amount by which to divide the current horizontal extent",
            "$iYNum": "The amount by which to multiply the current vertical extent",
            "$iYDenom": "The amount by which to divide the current vertical extent",
        ];

    "_WinAPI_ScreenToClient" => "Converts screen coordinates of a specified point on the screen to client coordinates",
        "_WinAPI_ScreenToClient ( $hWnd, ByRef $tPoint )",
        [
            "$hWnd": "Identifies the window that be used for the conversion",
            "$tPoint": "$tagPOINT structure that contains the screen coordinates to be converted",
        ];

    "_WinAPI_SearchPath" => "Searches for a specified file in a specified path",
        "_WinAPI_SearchPath ( $sFilePath [, $sSearchPath = ''] )",
        [
            "$sFilePath": "The name of the file for which to search",
            "$sSearchPath": "**[optional]** The path to be searched for the file. If an empty string, the system search path is used.",
        ];

    "_WinAPI_SelectClipPath" => "Selects the current path as a clipping region for a device context",
        "_WinAPI_SelectClipPath ( $hDC [, $iMode = 5] )",
        [
            "$hDC": "Handle to the device context of the path",
            "$iMode": "**[optional]** The way to use the path, e.g. $RGN_AND, $RGN_COPY, $RGN_DIFF, $RGN_OR or $RGN_XOR",
        ];

    "_WinAPI_SelectClipRgn" => "Selects a region as the current clipping region for the specified device context",
        "_WinAPI_SelectClipRgn ( $hDC, $hRgn )",
        [
            "$hDC": "Handle to the device context",
            "$hRgn": "Handle to the region to be selected. If 0, the current clipping region is removed.",
        ];

    "_WinAPI_SelectObject" => "Selects an object into the specified device context",
        "_WinAPI_SelectObject ( $hDC, $hGDIObj )",
        [
            "$hDC": "Identifies the device context",
            "$hGDIObj": "Identifies the object to be selected",
        ];

    "_WinAPI_SendInput" => "Synthesizes keystrokes, mouse motions, and button clicks",
        "_WinAPI_SendInput ( $iCount, $pInputs )",
        [
            "$iCount": "The number of structures in the $pInputs array",
            "$pInputs": "A pointer to an array of $tagINPUT structures",
        ];

    "_WinAPI_SendMessage" => "Sends the specified message to a window or windows",
        "_WinAPI_SendMessage ( $hWnd, $iMsg [, $wParam = 0 [, $lParam = 0 [, $iReturn = 0 [, $wParamType = \"wparam\" [, $lParamType = \"lparam\" [, $sReturnType = \"lresult\"]]]]]] )",
        [
            "$hWnd": "Window handle of the destination window",
            "$iMsg": "The message to send",
            "$wParam": "**[optional]** Additional message-specific information",
            "$lParam": "**[optional]** Additional message-specific information",
            "$iReturn": "**[optional]** Determines what to return:\n    0 - Return the message result\n    1 - wParam\n    2 - lParam\n    3 - Return the full DllCall array",
            "$wParamType": "**[optional]** The data type for $wParam",
            "$lParamType": "**[optional]** The data type for $lParam",
            "$sReturnType": "**[optional]** The data type of the return value",
        ];

    "_WinAPI_SendMessageTimeout" => "Sends the specified message to one or more windows and waits for the result with a time-out",
        "_WinAPI_SendMessageTimeout ( $hWnd, $iMsg [, $wParam = 0 [, $lParam = 0 [, $iTimeout = 1000 [, $iFlags = 0]]]] )",
        [
            "$hWnd": "Handle to the window whose window procedure will receive the message",
            "$iMsg": "The message to be sent",
            "$wParam": "**[optional]** Additional message-specific information",
            "$lParam": "**[optional]** Additional message-specific information",
            "$iTimeout": "**[optional]** The duration of the time-out period, in milliseconds",
            "$iFlags": "**[optional]** The behavior of this function, e.g. $SMTO_ABORTIFHUNG, $SMTO_BLOCK, $SMTO_NORMAL or $SMTO_NOTIMEOUTIFNOTHUNG",
        ];

    "_WinAPI_SendNotifyMessage" => "Sends the specified message to a window or windows without waiting for the window procedure to process it",
        "_WinAPI_SendNotifyMessage ( $hWnd, $iMsg [, $wParam = 0 [, $lParam = 0]] )",
        [
            "$hWnd": "Handle to the window whose window procedure will receive the message",
            "$iMsg": "The message to be sent",
            "$wParam": "**[optional]** Additional message-specific information",
            "$lParam": "**[optional]** Additional message-specific information",
        ];

    "_WinAPI_SetActiveWindow" => "Activates a window",
        "_WinAPI_SetActiveWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the top-level window to be activated",
        ];

    "_WinAPI_SetArcDirection" => "Sets the drawing direction to be used for arc and rectangle functions",
        "_WinAPI_SetArcDirection ( $hDC, $iDirection )",
        [
            "$hDC": "Handle to the device context",
            "$iDirection": "The new arc direction, $AD_COUNTERCLOCKWISE or $AD_CLOCKWISE",
        ];

    "_WinAPI_SetBitmapBits" => "Sets the bits of color data for a bitmap to the specified values",
        "_WinAPI_SetBitmapBits ( $hBitmap, $iSize, $pBits )",
        [
            "$hBitmap": "Handle to the bitmap to be set",
            "$iSize": "The number of bytes pointed to by the $pBits parameter",
            "$pBits": "Pointer to an array of bytes that contain color data for the specified bitmap",
        ];

    "_WinAPI_SetBitmapDimensionEx" => "Assigns preferred dimensions to a compatible bitmap",
        "_WinAPI_SetBitmapDimensionEx ( $hBitmap, $iWidth, $iHeight )",
        [
            "$hBitmap": "Handle to the bitmap",
            "$iWidth": "The width, in 0.1-millimeter units, of the bitmap",
            "$iHeight": "The height, in 0.1-millimeter units, of the bitmap",
        ];

    "_WinAPI_SetBkColor" => "Sets the current background color to the specified color value",
        "_WinAPI_SetBkColor ( $hDC, $iColor )",
        [
            "$hDC": "Handle to the device context",
            "$iColor": "Specifies the new background color",
        ];

    "_WinAPI_SetBkMode" => "Sets the background mix mode of the specified device context",
        "_WinAPI_SetBkMode ( $hDC, $iBkMode )",
        [
            "$hDC": "Handle to the device context",
            "$iBkMode": "Specifies the background mode:\n    $OPAQUE - Background is filled with the current background color before the text is drawn\n    $TRANSPARENT - Background remains untouched",
        ];

    "_WinAPI_SetBoundsRect" => "Controls the accumulation of bounding rectangle information for the specified device context",
        "_WinAPI_SetBoundsRect ( $hDC, $iFlags [, $tRECT = 0] )",
        [
            "$hDC": "Handle to the device context for which to accumulate bounding rectangles",
            "$iFlags": "The way the new rectangle will be combined with the accumulated rectangle, e.g. $DCB_ACCUMULATE, $DCB_DISABLE or $DCB_ENABLE",
            "$tRECT": "**[optional]** $tagRECT structure used to set the bounding rectangle, in logical coordinates",
        ];

    "_WinAPI_SetBrushOrg" => "Sets the brush origin that GDI assigns to the next brush an application selects into the specified device context",
        "_WinAPI_SetBrushOrg ( $hDC, $iX, $iY )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in device units, of the new brush origin",
            "$iY": "The y-coordinate, in device units, of the new brush origin",
        ];

    "_WinAPI_SetCapture" => "Sets the mouse capture to the specified window belonging to the current thread",
        "_WinAPI_SetCapture ( $hWnd )",
        [
            "$hWnd": "Handle to the window in the current thread that is to capture the mouse",
        ];

    "_WinAPI_SetCaretBlinkTime" => "Sets the caret blink time",
        "_WinAPI_SetCaretBlinkTime ( $iDuration )",
        [
            "$iDuration": "The new blink time, in milliseconds",
        ];

    "_WinAPI_SetCaretPos" => "Moves the caret to the specified coordinates",
        "_WinAPI_SetCaretPos ( $iX, $iY )",
        [
            "$iX": "The new x-coordinate of the caret",
            "$iY": "The new y-coordinate of the caret",
        ];

    "_WinAPI_SetClassLongEx" => "Replaces the specified value into the specified window class",
        "_WinAPI_SetClassLongEx ( $hWnd, $iIndex, $iNewLong )",
        [
            "$hWnd": "Handle to the window",
            "$iIndex": "The value to be replaced, e.g. $GCL_HBRBACKGROUND, $GCL_HCURSOR or $GCL_HICON",
            "$iNewLong": "The replacement value",
        ];

    "_WinAPI_SetColorAdjustment" => "Sets the color adjustment values for a device context",
        "_WinAPI_SetColorAdjustment ( $hDC, $tAdjustment )",
        [
            "$hDC": "Handle to the device context",
            "$tAdjustment": "$tagCOLORADJUSTMENT structure containing the color adjustment values",
        ];

    "_WinAPI_SetCompression" => "Sets the compression state of a file or directory",
        "_WinAPI_SetCompression ( $sFilePath, $iCompression )",
        [
            "$sFilePath": "The name of the file or directory",
            "$iCompression": "The compression state, e.g. $COMPRESSION_FORMAT_NONE, $COMPRESSION_FORMAT_DEFAULT or $COMPRESSION_FORMAT_LZNT1",
        ];

    "_WinAPI_SetCurrentDirectory" => "Changes the current directory for the current process",
        "_WinAPI_SetCurrentDirectory ( $sDir )",
        [
            "$sDir": "The path to the new current directory",
        ];

    "_WinAPI_SetCursor" => "Establishes the cursor shape",
        "_WinAPI_SetCursor ( $hCursor )",
        [
            "$hCursor": "Identifies the cursor",
        ];

    "_WinAPI_SetCursorPos" => "Moves the cursor to the specified screen coordinates",
        "_WinAPI_SetCursorPos ( $iX, $iY )",
        [
            "$iX": "The new x-coordinate of the cursor, in screen coordinates",
            "$iY": "The new y-coordinate of the cursor, in screen coordinates",
        ];

    "_WinAPI_SetDCBrushColor" => "Sets the current device context brush color to the specified color value",
        "_WinAPI_SetDCBrushColor ( $hDC, $iRGB )",
        [
            "$hDC": "Handle to the device context",
            "$iRGB": "The new brush color",
        ];

    "_WinAPI_SetDCPenColor" => "Sets the current device context pen color to the specified color value",
        "_WinAPI_SetDCPenColor ( $hDC, $iRGB )",
        [
            "$hDC": "Handle to the device context",
            "$iRGB": "The new pen color",
        ];

    "_WinAPI_SetDefaultPrinter" => "Sets the printer name of the default printer for the current user on the local computer",
        "_WinAPI_SetDefaultPrinter ( $sPrinter )",
        [
            "$sPrinter": "The default printer name",
        ];

    "_WinAPI_SetDeviceGammaRamp" => "Sets the gamma ramp on direct color display boards having drivers that support downloadable gamma ramps in hardware",
        "_WinAPI_SetDeviceGammaRamp ( $hDC, Const ByRef $aRamp )",
        [
            "$hDC": "Handle to the device context of the direct color display board in question",
            "$aRamp": "The 2D array ([r1, g1, b1], [r2, g2, b2], ... [r256, g256, b256]) that contains the gamma ramp to be set",
        ];

    "_WinAPI_SetDIBColorTable" => "Sets RGB color table in the DIB section bitmap",
        "_WinAPI_SetDIBColorTable ( $hBitmap, $tColorTable, $iColorCount [, $iStartIndex = 0] )",
        [
            "$hBitmap": "Handle to the DIB section bitmap",
            "$tColorTable": "The structure that contains the color table",
            "$iColorCount": "The number of entries in the color table",
            "$iStartIndex": "**[optional]** The color table index of the first entry to set",
        ];

    "_WinAPI_SetDIBits" => "Sets the pixels in a compatible bitmap using the color data found in the specified DIB",
        "_WinAPI_SetDIBits ( $hDC, $hBitmap, $iStartScan, $iScanLines, $pBits, $tBMI [, $iColorUse = 0] )",
        [
            "$hDC": "Handle to a device context",
            "$hBitmap": "Handle to the compatible bitmap (DDB) that is to be altered using the color data from the specified DIB",
            "$iStartScan": "The starting scan line for the device-independent color data in the array pointed to by $pBits",
            "$iScanLines": "The number of scan lines found in the array containing device-independent color data",
            "$pBits": "Pointer to the DIB color data, stored as an array of bytes",
            "$tBMI": "$tagBITMAPINFO structure that contains information about the DIB",
            "$iColorUse": "**[optional]** Type of color used, $DIB_PAL_COLORS or $DIB_RGB_COLORS",
        ];

    "_WinAPI_SetDIBitsToDevice" => "Sets the pixels in the specified rectangle on the device that is associated with the destination device context using color data from a DIB",
        "_WinAPI_SetDIBitsToDevice ( $hDC, $iXDest, $iYDest, $iWidth, $iHeight, $iXSrc, $iYSrc, $iStartScan, $iScanLines, $tBITMAPINFO, $iUsage, $pBits )",
        [
            "$hDC": "Handle to the device context",
            "$iXDest": "The x-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iYDest": "The y-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iWidth": "The width, in logical units, of the image",
            "$iHeight": "The height, in logical units, of the image",
            "$iXSrc": "The x-coordinate, in logical units, of the lower-left corner of the image",
            "$iYSrc": "The y-coordinate, in logical units, of the lower-left corner of the image",
            "$iStartScan": "The starting scan line in the image",
            "$iScanLines": "The number of DIB scan lines contained in the array pointed to by $pBits",
            "$tBITMAPINFO": "$tagBITMAPINFO structure that contains information about the DIB",
            "$iUsage": "Specifies whether the color table contains explicit RGB values or indexes into a palette",
            "$pBits": "Pointer to the color data stored as an array of bytes",
        ];

    "_WinAPI_SetDllDirectory" => "Adds a directory to the search path used to locate DLLs for the application",
        "_WinAPI_SetDllDirectory ( [$sDirPath = Default] )",
        [
            "$sDirPath": "**[optional]** The directory to be added to the search path. If Default, the standard search path is restored.",
        ];

    "_WinAPI_SetDoubleClickTime" => "Sets the double-click time for the mouse",
        "_WinAPI_SetDoubleClickTime ( $iInterval )",
        [
            "$iInterval": "The number of milliseconds that may occur between the first and second clicks of a double-click",
        ];

    "_WinAPI_SetEndOfFile" => "Sets the physical file size for the specified file to the current position of the file pointer",
        "_WinAPI_SetEndOfFile ( $hFile )",
        [
            "$hFile": "Handle to the file to be extended or truncated",
        ];

    "_WinAPI_SetEnhMetaFileBits" => "Creates a memory-based enhanced-format metafile from the specified data",
        "_WinAPI_SetEnhMetaFileBits ( $pData, $iLength )",
        [
            "$pData": "Pointer to a buffer that contains enhanced-metafile data",
            "$iLength": "The size, in bytes, of the specified data",
        ];

    "_WinAPI_SetErrorMode" => "Controls whether the system will handle the specified types of serious errors or whether the process will handle them",
        "_WinAPI_SetErrorMode ( $iMode )",
        [
            "$iMode": "The process error mode, e.g. $SEM_FAILCRITICALERRORS, $SEM_NOALIGNMENTFAULTEXCEPT, $SEM_NOGPFAULTERRORBOX or $SEM_NOOPENFILEERRORBOX",
        ];

    "_WinAPI_SetEvent" => "Sets the specified event object to the signaled state",
        "_WinAPI_SetEvent ( $hEvent )",
        [
            "$hEvent": "Handle to the event object",
        ];

    "_WinAPI_SetFileAttributes" => "Sets the attributes for a file or directory",
        "_WinAPI_SetFileAttributes ( $sFilePath, $iAttributes )",
        [
            "$sFilePath": "The name of the file whose attributes are to be set",
            "$iAttributes": "The file attributes to set for the file, e.g. $FILE_ATTRIBUTE_ARCHIVE, $FILE_ATTRIBUTE_HIDDEN, $FILE_ATTRIBUTE_NORMAL or $FILE_ATTRIBUTE_READONLY",
        ];

    "_WinAPI_SetFileInformationByHandleEx" => "Sets the file information for the specified file",
        "_WinAPI_SetFileInformationByHandleEx ( $hFile, $tFILEINFO )",
        [
            "$hFile": "Handle to the file for which to change information",
            "$tFILEINFO": "$tagFILEINFO structure that contains the information to change",
        ];

    "_WinAPI_SetFilePointer" => "Moves the file pointer of the specified file",
        "_WinAPI_SetFilePointer ( $hFile, $iPos [, $iMethod = 0] )",
        [
            "$hFile": "Handle to the file",
            "$iPos": "The number of bytes to move the file pointer",
            "$iMethod": "**[optional]** The starting point for the file pointer move:\n    $FILE_BEGIN (0) - The starting point is zero or the beginning of the file\n    $FILE_CURRENT (1) - The starting point is the current value of the file pointer\n    $FILE_END (2) - The starting point is the current end-of-file position",
        ];

    "_WinAPI_SetFilePointerEx" => "Moves the file pointer of the specified file",
        "_WinAPI_SetFilePointerEx ( $hFile, $iPos [, $iMethod = 0] )",
        [
            "$hFile": "Handle to the file",
            "$iPos": "The number of bytes to move the file pointer",
            "$iMethod": "**[optional]** The starting point for the file pointer move, $FILE_BEGIN, $FILE_CURRENT or $FILE_END",
        ];

    "_WinAPI_SetFileShortName" => "Sets the short name for the specified file",
        "_WinAPI_SetFileShortName ( $hFile, $sShortName )",
        [
            "$hFile": "Handle to the file",
            "$sShortName": "The valid short name for the file",
        ];

    "_WinAPI_SetFileTime" => "Sets the date and time that the specified file or directory was created, last accessed, or last modified",
        "_WinAPI_SetFileTime ( $hFile [, $tCreationTime = 0 [, $tLastAccessTime = 0 [, $tLastWriteTime = 0]]] )",
        [
            "$hFile": "Handle to the file or directory",
            "$tCreationTime": "**[optional]** $tagFILETIME structure that contains the new creation date and time",
            "$tLastAccessTime": "**[optional]** $tagFILETIME structure that contains the new last access date and time",
            "$tLastWriteTime": "**[optional]** $tagFILETIME structure that contains the new last modified date and time",
        ];

    "_WinAPI_SetFileValidData" => "Sets the valid data length of the specified file",
        "_WinAPI_SetFileValidData ( $hFile, $iLength )",
        [
            "$hFile": "Handle to the file",
            "$iLength": "The new valid data length",
        ];

    "_WinAPI_SetFocus" => "Sets the keyboard focus to the specified window",
        "_WinAPI_SetFocus ( $hWnd )",
        [
            "$hWnd": "Identifies the window that will receive the keyboard input. If this parameter is 0, keystrokes are ignored.",
        ];

    "_WinAPI_SetFont" => "Sets a window font",
        "_WinAPI_SetFont ( $hWnd, $hFont [, $bRedraw = True] )",
        [
            "$hWnd": "Window handle",
            "$hFont": "Font handle",
            "$bRedraw": "**[optional]** True to redraw the control",
        ];

    "_WinAPI_SetForegroundWindow" => "Puts the thread that created the specified window into the foreground and activates the window",
        "_WinAPI_SetForegroundWindow ( $hWnd )",
        [
            "$hWnd": "Handle to the window that should be activated and brought to the foreground",
        ];

    "_WinAPI_SetGraphicsMode" => "Sets the graphics mode for the specified device context",
        "_WinAPI_SetGraphicsMode ( $hDC, $iMode )",
        [
            "$hDC": "Handle to the device context",
            "$iMode": "The graphics mode, $GM_COMPATIBLE or $GM_ADVANCED",
        ];

    "_WinAPI_SetHandleInformation" => "Sets certain properties of an object handle",
        "_WinAPI_SetHandleInformation ( $hObject, $iMask, $iFlags )",
        [
            "$hObject": "Handle to an object whose information is to be set",
            "$iMask": "The bit flags that specify the properties to be changed, $HANDLE_FLAG_INHERIT or $HANDLE_FLAG_PROTECT_FROM_CLOSE",
            "$iFlags": "The new values of the properties specified by $iMask",
        ];

    "_WinAPI_SetInformationJobObject" => "Sets limits for a job object",
        "_WinAPI_SetInformationJobObject ( $hJob, $iJobObjectInfoClass, $tJobObjectInfo )",
        [
            "$hJob": "Handle to the job whose limits are being set",
            "$iJobObjectInfoClass": "The information class for the limits to be set",
            "$tJobObjectInfo": "The structure that contains the limits to be set",
        ];

    "_WinAPI_SetKeyboardLayout" => "Changes the input locale identifier for the specified window",
        "_WinAPI_SetKeyboardLayout ( $hWnd, $iLanguage [, $iFlags = 0] )",
        [
            "$hWnd": "Handle to the window",
            "$iLanguage": "The input locale identifier",
            "$iFlags": "**[optional]** The flag that specifies how the input locale identifier is to be loaded",
        ];

    "_WinAPI_SetKeyboardState" => "Copies a 256-byte array of keyboard key states into the calling thread's keyboard input-state table",
        "_WinAPI_SetKeyboardState ( ByRef $tState )",
        [
            "$tState": "The structure that contains the keyboard key states",
        ];

    "_WinAPI_SetLastError" => "Sets the last-error code for the calling thread",
        "_WinAPI_SetLastError ( $iErrorCode [, $iError = @error [, $iExtended = @extended]] )",
        [
            "$iErrorCode": "The last-error code for the thread",
            "$iError": "**[optional]** Sets the @error flag on return. Defaults to the @error value the function was called with.",
            "$iExtended": "**[optional]** Sets the @extended flag on return. Defaults to the @extended value the function was called with.",
        ];

    "_WinAPI_SetLayeredWindowAttributes" => "Sets Layered Window Properties",
        "_WinAPI_SetLayeredWindowAttributes ( $hWnd, $iTransColor [, $iTransGUI = 255 [, $iFlags = 0x03 [, $bColorRef = False]]] )",
        [
            "$hWnd": "Handle to the layered window",
            "$iTransColor": "The transparency color key to be used when composing the layered window",
            "$iTransGUI": "**[optional]** The alpha value used to describe the opacity of the layered window, 0 (transparent) to 255 (opaque)",
            "$iFlags": "**[optional]** The action to be taken, $LWA_ALPHA or $LWA_COLORKEY",
            "$bColorRef": "**[optional]** Specifies whether $iTransColor is a COLORREF",
        ];

    "_WinAPI_SetLocaleInfo" => "Sets an item of information in the user override portion of the current locale",
        "_WinAPI_SetLocaleInfo ( $iLCID, $iType, $sData )",
        [
            "$iLCID": "The locale identifier (LCID)",
            "$iType": "The type of locale information to set, e.g. $LOCALE_SDECIMAL or $LOCALE_STHOUSAND",
            "$sData": "The locale information to set",
        ];

    "_WinAPI_SetMapMode" => "Sets the mapping mode of the specified device context",
        "_WinAPI_SetMapMode ( $hDC, $iMode )",
        [
            "$hDC": "Handle to the device context",
            "$iMode": "The new mapping mode, e.g. $MM_ANISOTROPIC, $MM_HIENGLISH, $MM_ISOTROPIC or $MM_TEXT",
        ];

    "_WinAPI_SetMenu" => "Assigns a new menu to the specified window",
        "_WinAPI_SetMenu ( $hWnd, $hMenu )",
        [
            "$hWnd": "Handle to the window to which the menu is to be assigned",
            "$hMenu": "Handle to the new menu. If 0, the window's current menu is removed.",
        ];

    "_WinAPI_SetMessageExtraInfo" => "Sets the extra message information for the current thread",
        "_WinAPI_SetMessageExtraInfo ( $lParam )",
        [
            "$lParam": "The value to be associated with the current thread",
        ];

    "_WinAPI_SetParent" => "Changes the parent window of the specified child window",
        "_WinAPI_SetParent ( $hWndChild, $hWndParent )",
        [
            "$hWndChild": "Window handle of child window",
            "$hWndParent": "Handle to the new parent window. If 0, the desktop window becomes the new parent window.",
        ];

    "_WinAPI_SetPixel" => "Sets the pixel at the specified coordinates to the specified color",
        "_WinAPI_SetPixel ( $hDC, $iX, $iY, $iRGB )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in logical units, of the point to be set",
            "$iY": "The y-coordinate, in logical units, of the point to be set",
            "$iRGB": "The color to be used to paint the point",
        ];

    "_WinAPI_SetPolyFillMode" => "Sets the polygon fill mode for functions that fill polygons",
        "_WinAPI_SetPolyFillMode ( $hDC [, $iMode = 1] )",
        [
            "$hDC": "Handle to the device context",
            "$iMode": "**[optional]** The new fill mode, $ALTERNATE or $WINDING",
        ];

    "_WinAPI_SetPriorityClass" => "Sets the priority class for the specified process",
        "_WinAPI_SetPriorityClass ( $iPriority [, $iPID = 0] )",
        [
            "$iPriority": "The priority class for the process, e.g. $ABOVE_NORMAL_PRIORITY_CLASS, $BELOW_NORMAL_PRIORITY_CLASS, $HIGH_PRIORITY_CLASS, $IDLE_PRIORITY_CLASS, $NORMAL_PRIORITY_CLASS or $REALTIME_PRIORITY_CLASS",
            "$iPID": "**[optional]** The PID of the process. Default (0) is the current process.",
        ];

    "_WinAPI_SetProcessShutdownParameters" => "Sets shutdown parameters for the currently calling process",
        "_WinAPI_SetProcessShutdownParameters ( $iLevel [, $bDialog = False] )",
        [
            "$iLevel": "The shutdown priority for a process relative to the other processes in the system",
            "$bDialog": "**[optional]** Specifies whether to display a retry dialog box for the user",
        ];

    "_WinAPI_SetProcessWindowStation" => "Assigns the specified window station to the calling process",
        "_WinAPI_SetProcessWindowStation ( $hStation )",
        [
            "$hStation": "Handle to the window station",
        ];

    "_WinAPI_SetProp" => "Adds a new entry or changes an existing entry in the property list of the specified window",
        "_WinAPI_SetProp ( $hWnd, $sProp, $hData )",
        [
            "$hWnd": "Handle to the window whose property list receives the new entry",
            "$sProp": "The property name",
            "$hData": "A handle to the data to be copied to the property list",
        ];

    "_WinAPI_SetRectRgn" => "Changes the specified region into a rectangular region with the specified coordinates",
        "_WinAPI_SetRectRgn ( $hRgn, $tRECT )",
        [
            "$hRgn": "Handle to the region",
            "$tRECT": "$tagRECT structure that contains the coordinates of the rectangular region in logical units",
        ];

    "_WinAPI_SetROP2" => "Sets the current foreground mix mode",
        "_WinAPI_SetROP2 ( $hDC, $iMode )",
        [
            "$hDC": "Handle to the device context",
            "$iMode": "The mix mode, e.g. $R2_BLACK, $R2_COPYPEN, $R2_NOT or $R2_XORPEN",
        ];

    "_WinAPI_SetSearchPathMode" => "Sets the per-process mode that the _WinAPI_SearchPath() function uses when locating files",
        "_WinAPI_SetSearchPathMode ( $iFlags )",
        [
            "$iFlags": "The search mode to use, e.g. $BASE_SEARCH_PATH_ENABLE_SAFE_SEARCHMODE or $BASE_SEARCH_PATH_DISABLE_SAFE_SEARCHMODE",
        ];

    "_WinAPI_SetStretchBltMode" => "Sets the bitmap stretching mode in the specified device context",
        "_WinAPI_SetStretchBltMode ( $hDC, $iMode )",
        [
            "$hDC": "Handle to the device context",
            "$iMode": "The stretching mode, e.g. $BLACKONWHITE, $COLORONCOLOR, $HALFTONE or $WHITEONBLACK",
        ];

    "_WinAPI_SetSysColors" => "Sets the colors for the specified display elements",
        "_WinAPI_SetSysColors ( $vElements, $vColors )",
        [
            "$vElements": "Single or array of the display elements for which colors are to be set, e.g. $COLOR_BTNFACE",
            "$vColors": "Single or array of new RGB color values for the display elements",
        ];

    "_WinAPI_SetSystemCursor" => "Enables an application to customize the system cursors",
        "_WinAPI_SetSystemCursor ( $hCursor, $iID [, $bCopy = False] )",
        [
            "$hCursor": "Handle to the cursor",
            "$iID": "The system cursor to replace with the contents of $hCursor, e.g. $OCR_NORMAL or $OCR_WAIT",
            "$bCopy": "**[optional]** Specifies whether to copy the cursor before replacing",
        ];

    "_WinAPI_SetTextAlign" => "Sets the text-alignment flags for the specified device context",
        "_WinAPI_SetTextAlign ( $hDC [, $iMode = 0] )",
        [
            "$hDC": "Handle to the device context",
            "$iMode": "**[optional]** The text alignment, e.g. $TA_BASELINE, $TA_BOTTOM, $TA_CENTER, $TA_LEFT or $TA_TOP",
        ];

    "_WinAPI_SetTextCharacterExtra" => "Sets the intercharacter spacing",
        "_WinAPI_SetTextCharacterExtra ( $hDC, $iCharExtra )",
        [
            "$hDC": "Handle to the device context",
            "$iCharExtra": "The amount of extra space, in logical units, to be added to each character",
        ];

    "_WinAPI_SetTextColor" => "Sets the current text color to the specified color value",
        "_WinAPI_SetTextColor ( $hDC, $iColor )",
        [
            "$hDC": "Handle to the device context",
            "$iColor": "Specifies the new text color",
        ];

    "_WinAPI_SetTextJustification" => "Specifies the amount of space the system should add to the break characters in a string of text",
        "_WinAPI_SetTextJustification ( $hDC, $iBreakExtra, $iBreakCount )",
        [
            "$hDC": "Handle to the device context",
            "$iBreakExtra": "The total extra space, in logical units, to be added to the line of text",
            "$iBreakCount": "The number of break characters in the line",
        ];

    "_WinAPI_SetThemeAppProperties" => "Sets the flags that determine how visual styles are implemented in the calling application",
        "_WinAPI_SetThemeAppProperties ( $iFlags )",
        [
            "$iFlags": "The visual style flags, e.g. $STAP_ALLOW_CONTROLS, $STAP_ALLOW_NONCLIENT or $STAP_ALLOW_WEBCONTENT",
        ];

    "_WinAPI_SetThreadDesktop" => "Assigns the specified desktop to the calling thread",
        "_WinAPI_SetThreadDesktop ( $hDesktop )",
        [
            "$hDesktop": "Handle to the desktop to be assigned to the calling thread",
        ];

    "_WinAPI_SetThreadErrorMode" => "Controls whether the system will handle the specified types of serious errors or whether the calling thread will handle them",
        "_WinAPI_SetThreadErrorMode ( $iMode )",
        [
            "$iMode": "The thread error mode, e.g. $SEM_FAILCRITICALERRORS, $SEM_NOGPFAULTERRORBOX or $SEM_NOOPENFILEERRORBOX",
        ];

    "_WinAPI_SetThreadExecutionState" => "Prevents the system from entering sleep or turning off the display while the application is running",
        "_WinAPI_SetThreadExecutionState ( $iFlags )",
        [
            "$iFlags": "The thread's execution requirements, e.g. $ES_AWAYMODE_REQUIRED, $ES_CONTINUOUS, $ES_DISPLAY_REQUIRED or $ES_SYSTEM_REQUIRED",
        ];

    "_WinAPI_SetThreadLocale" => "Sets the current locale of the calling thread",
        "_WinAPI_SetThreadLocale ( $iLCID )",
        [
            "$iLCID": "The locale identifier (LCID) that specifies the locale",
        ];

    "_WinAPI_SetThreadPriority" => "Sets the priority value for the specified thread",
        "_WinAPI_SetThreadPriority ( $hThread, $iPriority )",
        [
            "$hThread": "Handle to the thread whose priority value is to be set",
            "$iPriority": "The priority value for the thread, e.g. $THREAD_PRIORITY_ABOVE_NORMAL, $THREAD_PRIORITY_HIGHEST or $THREAD_PRIORITY_IDLE",
        ];

    "_WinAPI_SetThreadUILanguage" => "Sets the user interface language for the current thread",
        "_WinAPI_SetThreadUILanguage ( $iLanguage )",
        [
            "$iLanguage": "The language identifier for the user interface language for the thread",
        ];

    "_WinAPI_SetTimer" => "Creates a timer with the specified time-out value",
        "_WinAPI_SetTimer ( $hWnd, $iTimerID, $iElapse, $pTimerFunc )",
        [
            "$hWnd": "Handle to the window to be associated with the timer",
            "$iTimerID": "The timer identifier",
            "$iElapse": "The time-out value, in milliseconds",
            "$pTimerFunc": "The address of the callback function to be notified when the time-out value elapses",
        ];

    "_WinAPI_SetUDFColorMode" => "Sets the color mode for the WinAPIEx UDF library",
        "_WinAPI_SetUDFColorMode ( $iMode )",
        [
            "$iMode": "The color mode, 0 for RGB or 1 for BGR",
        ];

    "_WinAPI_SetUserGeoID" => "Sets the geographical location identifier for the user",
        "_WinAPI_SetUserGeoID ( $iGEOID )",
        [
            "$iGEOID": "The identifier for the geographical location of the user",
        ];

    "_WinAPI_SetUserObjectInformation" => "Sets information about the specified window station or desktop object",
        "_WinAPI_SetUserObjectInformation ( $hObject, $iIndex, ByRef $tData )",
        [
            "$hObject": "Handle to the window station or desktop object",
            "$iIndex": "The object information to be set, $UOI_FLAGS",
            "$tData": "The structure that contains the object information",
        ];

    "_WinAPI_SetVolumeMountPoint" => "Associates a volume with a drive letter or a directory on another volume",
        "_WinAPI_SetVolumeMountPoint ( $sFilePath, $sGUID )",
        [
            "$sFilePath": "The drive letter or directory on another volume to associate with the volume",
            "$sGUID": "The volume GUID path for the volume, in the form \"\\\\?\\Volume{GUID}\\\"",
        ];

    "_WinAPI_SetWaitableTimer" => "Activates the specified waitable timer",
        "_WinAPI_SetWaitableTimer ( $hTimer, $iDueTime [, $iPeriod = 0 [, $pProc = 0 [, $pArg = 0 [, $bResume = False]]]] )",
        [
            "$hTimer": "Handle to the timer object",
            "$iDueTime": "The time after which the state of the timer is to be set to signaled, in 100 nanosecond intervals",
            "$iPeriod": "**[optional]** The period of the timer, in milliseconds",
            "$pProc": "**[optional]** A pointer to an optional completion routine",
            "$pArg": "**[optional]** A pointer to a structure that is passed to the completion routine",
            "$bResume": "**[optional]** Specifies whether to restore a system in suspended power conservation mode when the timer state is set to signaled",
        ];

    "_WinAPI_SetWindowContextHelpId" => "Associates a Help context identifier with the specified window",
        "_WinAPI_SetWindowContextHelpId ( $hWnd, $iID )",
        [
            "$hWnd": "Handle to the window with which to associate the Help context identifier",
            "$iID": "The Help context identifier",
        ];

    "_WinAPI_SetWindowDisplayAffinity" => "Stores the display affinity setting in kernel mode on the specified window",
        "_WinAPI_SetWindowDisplayAffinity ( $hWnd, $iAffinity )",
        [
            "$hWnd": "Handle to the window",
            "$iAffinity": "The display affinity setting, $WDA_NONE or $WDA_MONITOR",
        ];

    "_WinAPI_SetWindowExt" => "Sets the horizontal and vertical extents of the window for a device context by using the specified values",
        "_WinAPI_SetWindowExt ( $hDC, $iXExtent, $iYExtent )",
        [
            "$hDC": "Handle to the device context",
            "$iXExtent": "The window's horizontal extent in logical units",
            "$iYExtent": "The window's vertical extent in logical units",
        ];

    "_WinAPI_SetWindowLong" => "Sets information about the specified window",
        "_WinAPI_SetWindowLong ( $hWnd, $iIndex, $iValue )",
        [
            "$hWnd": "Handle of the window",
            "$iIndex": "Specifies the zero based offset to the value to be set. See _WinAPI_GetWindowLong for the list of values.",
            "$iValue": "Specifies the replacement value",
        ];

    "_WinAPI_SetWindowOrg" => "Specifies which window point maps to the viewport origin (0,0)",
        "_WinAPI_SetWindowOrg ( $hDC, $iX, $iY )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in logical units, of the new window origin",
            "$iY": "The y-coordinate, in logical units, of the new window origin",
        ];

    "_WinAPI_SetWindowPlacement" => "Sets the show state and the restored, minimized, and maximized positions of the specified window",
        "_WinAPI_SetWindowPlacement ( $hWnd, $tWindowPlacement )",
        [
            "$hWnd": "Handle to the window",
            "$tWindowPlacement": "$tagWINDOWPLACEMENT structure that specifies the new show state and window positions",
        ];

    "_WinAPI_SetWindowPos" => "Changes the size, position, and Z order of a child, pop-up, or top-level window",
        "_WinAPI_SetWindowPos ( $hWnd, $hAfter, $iX, $iY, $iCX, $iCY, $iFlags )",
        [
            "$hWnd": "Handle of window",
            "$hAfter": "Identifies the window to precede the positioned window in the Z order:\n    $HWND_BOTTOM - Places the window at the bottom of the Z order\n    $HWND_NOTOPMOST - Places the window above all non-topmost windows\n    $HWND_TOP - Places the window at the top of the Z order\n    $HWND_TOPMOST - Places the window above all non-topmost windows",
            "$iX": "Specifies the new position of the left side of the window",
            "$iY": "Specifies the new position of the top of the window",
            "$iCX": "Specifies the new width of the window, in pixels",
            "$iCY": "Specifies the new height of the window, in pixels",
            "$iFlags": "Specifies the window sizing and positioning flags, e.g. $SWP_FRAMECHANGED, $SWP_HIDEWINDOW, $SWP_NOACTIVATE, $SWP_NOMOVE, $SWP_NOSIZE, $SWP_NOZORDER or $SWP_SHOWWINDOW",
        ];

    "_WinAPI_SetWindowRgn" => "Sets the window region of a window",
        "_WinAPI_SetWindowRgn ( $hWnd, $hRgn [, $bRedraw = True] )",
        [
            "$hWnd": "Handle to the window whose window region is to be set",
            "$hRgn": "Handle to a region. The function sets the window region of the window to this region. If $hRgn is 0, the function sets the window region to 0.",
            "$bRedraw": "**[optional]** Specifies whether the system redraws the window after setting the window region. If True, the system does so; otherwise, it does not.",
        ];

    "_WinAPI_SetWindowsHookEx" => "Installs an application-defined hook procedure into a hook chain",
        "_WinAPI_SetWindowsHookEx ( $iHook, $pProc, $hDll [, $iThreadId = 0] )",
        [
            "$iHook": "Specifies the type of hook procedure to be installed, e.g. $WH_CALLWNDPROC, $WH_CBT, $WH_GETMESSAGE, $WH_KEYBOARD, $WH_KEYBOARD_LL, $WH_MOUSE, $WH_MOUSE_LL or $WH_SHELL",
            "$pProc": "Pointer to the hook procedure",
            "$hDll": "Handle to the DLL containing the hook procedure pointed to by the $pProc parameter",
            "$iThreadId": "**[optional]** Specifies the identifier of the thread with which the hook procedure is to be associated. If 0, the hook procedure is associated with all existing threads running in the same desktop as the calling thread.",
        ];

    "_WinAPI_SetWindowText" => "Changes the text of the specified window's title bar",
        "_WinAPI_SetWindowText ( $hWnd, $sText )",
        [
            "$hWnd": "Handle to the window or control whose text is to be changed",
            "$sText": "String to be used as the new title or control text",
        ];

    "_WinAPI_SetWindowTheme" => "Causes a window to use a different set of visual style information than its class normally uses",
        "_WinAPI_SetWindowTheme ( $hWnd [, $sName = Default [, $sList = Default]] )",
        [
            "$hWnd": "Handle to the window whose visual style information is to be changed",
            "$sName": "**[optional]** The application name to use in place of the calling application's name",
            "$sList": "**[optional]** A semicolon-separated list of CLSID names to use in place of the actual list passed by the window's class",
        ];

    "_WinAPI_SetWorldTransform" => "Sets a two-dimensional linear transformation between world space and page space for the specified device context",
        "_WinAPI_SetWorldTransform ( $hDC, ByRef $tXFORM )",
        [
            "$hDC": "Handle to the device context",
            "$tXFORM": "$tagXFORM structure that contains the transformation data",
        ];

    "_WinAPI_SfcIsFileProtected" => "Determines whether the specified file is protected",
        "_WinAPI_SfcIsFileProtected ( $sFilePath )",
        [
            "$sFilePath": "The fully qualified path of the file",
        ];

    "_WinAPI_ShellAboutDlg" => "Displays a Windows About dialog box",
        "_WinAPI_ShellAboutDlg ( $sTitle, $sName, $sText [, $hIcon = 0 [, $hParent = 0]] )",
        [
            "$sTitle": "The title of the dialog box",
            "$sName": "The application name",
            "$sText": "The text that is displayed in the dialog box after the version and copyright information",
            "$hIcon": "**[optional]** Handle to the icon that the dialog box displays. If 0, the default Windows icon is displayed.",
            "$hParent": "**[optional]** Handle to the parent window",
        ];

    "_WinAPI_ShellAddToRecentDocs" => "Adds a file to the most recently and frequently item list",
        "_WinAPI_ShellAddToRecentDocs ( $sFilePath )",
        [
            "$sFilePath": "The path of the file to add. If an empty string, the list is cleared.",
        ];

    "_WinAPI_ShellChangeNotify" => "Notifies the system of an event that an application has performed",
        "_WinAPI_ShellChangeNotify ( $iEvent, $iFlags [, $iItem1 = 0 [, $iItem2 = 0]] )",
        [
            "$iEvent": "The event that has occurred, e.g. $SHCNE_ASSOCCHANGED, $SHCNE_CREATE, $SHCNE_DELETE, $SHCNE_RENAMEITEM or $SHCNE_UPDATEDIR",
            "$iFlags": "The flags that indicate the meaning of the $iItem1 and $iItem2 parameters, e.g. $SHCNF_IDLIST or $SHCNF_PATH",
            "$iItem1": "**[optional]** The first event-dependent value",
            "$iItem2": "**[optional]** The second event-dependent value",
        ];

    "_WinAPI_ShellChangeNotifyDeregister" => "Unregisters the client's window that is registered to receive notification messages",
        "_WinAPI_ShellChangeNotifyDeregister ( $iID )",
        [
            "$iID": "The value that specifies the registration ID returned by _WinAPI_ShellChangeNotifyRegister()",
        ];

    "_WinAPI_ShellChangeNotifyRegister" => "Registers a window to receive notifications from the file system or Shell",
        "_WinAPI_ShellChangeNotifyRegister ( $hWnd, $iMsg, $iEvents, $iSources, $aPaths [, $bRecursive = False] )",
        [
            "$hWnd": "Handle to the window that receives the change or notification messages",
            "$iMsg": "The message to be posted to the window procedure",
            "$iEvents": "The change notification events for which to receive notification",
            "$iSources": "The sources of the events, e.g. $SHCNRF_INTERRUPTLEVEL, $SHCNRF_SHELLLEVEL or $SHCNRF_RECURSIVEINTERRUPT",
            "$aPaths": "A single path or an array of paths for which to receive notifications",
            "$bRecursive": "**[optional]** Specifies whether to post notifications for children of this folder",
        ];

    "_WinAPI_ShellCreateDirectory" => "Creates a new file system folder",
        "_WinAPI_ShellCreateDirectory ( $sFilePath [, $hParent = 0 [, $tSecurity = 0]] )",
        [
            "$sFilePath": "The fully qualified path of the directory to be created",
            "$hParent": "**[optional]** Handle to a parent window",
            "$tSecurity": "**[optional]** $tagSECURITY_ATTRIBUTES structure with the directory's security attribute",
        ];

    "_WinAPI_ShellEmptyRecycleBin" => "Empties the Recycle Bin on the specified drive",
        "_WinAPI_ShellEmptyRecycleBin ( [$sRoot = '' [, $iFlags = 0 [, $hParent = 0]]] )",
        [
            "$sRoot": "**[optional]** The path of the root drive on which the Recycle Bin is located. If an empty string, all Recycle Bins on all drives are emptied.",
            "$iFlags": "**[optional]** The flags that specify how the Recycle Bin is emptied, e.g. $SHERB_NOCONFIRMATION, $SHERB_NOPROGRESSUI or $SHERB_NOSOUND",
            "$hParent": "**[optional]** Handle to the parent window of any dialog boxes",
        ];

    "_WinAPI_ShellExecute" => "Performs an operation on a specified file",
        "_WinAPI_ShellExecute ( $sFilePath [, $sArgs = '' [, $sDir = '' [, $sVerb = '' [, $iShow = 1 [, $hParent = 0]]]]] )",
        [
            "$sFilePath": "The file or object on which to execute the specified verb",
            "$sArgs": "**[optional]** The parameters to be passed to the application",
            "$sDir": "**[optional]** The default (working) directory for the action",
            "$sVerb": "**[optional]** The verb that specifies the action to be performed, e.g. \"edit\", \"explore\", \"find\", \"open\", \"print\" or \"runas\"",
            "$iShow": "**[optional]** The flags that specify how an application is to be displayed when it is opened, e.g. @SW_SHOW or @SW_HIDE",
            "$hParent": "**[optional]** Handle to the parent window used for displaying a UI or error messages",
        ];

    "_WinAPI_ShellExecuteEx" => "Performs an operation on a specified file",
        "_WinAPI_ShellExecuteEx ( ByRef $tSHEXINFO )",
        [
            "$tSHEXINFO": "$tagSHELLEXECUTEINFO structure that contains and receives information about the application being executed",
        ];

    "_WinAPI_ShellExtractAssociatedIcon" => "Returns a handle to the icon that is associated with the specified file",
        "_WinAPI_ShellExtractAssociatedIcon ( $sFilePath [, $bSmall = False] )",
        [
            "$sFilePath": "The full path and file name of the file",
            "$bSmall": "**[optional]** Specifies whether to extract a small icon",
        ];

    "_WinAPI_ShellExtractIcon" => "Extracts the icon with the specified dimension from the specified file",
        "_WinAPI_ShellExtractIcon ( $sIcon, $iIndex, $iWidth, $iHeight )",
        [
            "$sIcon": "The path and name of the file from which the icon are to be extracted",
            "$iIndex": "The zero-based index of the icon to extract",
            "$iWidth": "The horizontal icon size wanted",
            "$iHeight": "The vertical icon size wanted",
        ];

    "_WinAPI_ShellFileOperation" => "Copies, moves, renames, or deletes a file system object",
        "_WinAPI_ShellFileOperation ( $sFrom, $sTo, $iFunc, $iFlags [, $sTitle = '' [, $hParent = 0]] )",
        [
            "$sFrom": "A single string or an array of strings with the source file names",
            "$sTo": "A single string or an array of strings with the destination file or directory names",
            "$iFunc": "The operation to perform, $FO_COPY, $FO_DELETE, $FO_MOVE or $FO_RENAME",
            "$iFlags": "The flags that control the file operation, e.g. $FOF_ALLOWUNDO, $FOF_NOCONFIRMATION, $FOF_SILENT or $FOF_NOERRORUI",
            "$sTitle": "**[optional]** The title of a progress dialog box",
            "$hParent": "**[optional]** Handle to the dialog box used to display information about the status of the file operation",
        ];

    "_WinAPI_ShellFlushSFCache" => "Flushes the special folder cache",
        "_WinAPI_ShellFlushSFCache ( )",
        [];

    "_WinAPI_ShellGetFileInfo" => "Retrieves information about an object in the file system",
        "_WinAPI_ShellGetFileInfo ( $sFilePath, $iFlags, $iAttributes, ByRef $tSHFILEINFO )",
        [
            "$sFilePath": "The path and file name, or a PIDL if the $SHGFI_PIDL flag is set",
            "$iFlags": "The flags that specify the file information to retrieve, e.g. $SHGFI_ICON, $SHGFI_DISPLAYNAME, $SHGFI_TYPENAME or $SHGFI_SMALLICON",
            "$iAttributes": "A combination of one or more file attribute flags",
            "$tSHFILEINFO": "$tagSHFILEINFO structure to receive the file information",
        ];

    "_WinAPI_ShellGetIconOverlayIndex" => "Returns the index of the overlay icon in the system image list",
        "_WinAPI_ShellGetIconOverlayIndex ( $sIcon )",
        [
            "$sIcon": "The path of the file that contains the icon, including the index, e.g. \"shell32.dll,-30\"",
        ];

    "_WinAPI_ShellGetKnownFolderIDList" => "Retrieves the path of a known folder as an ITEMIDLIST structure",
        "_WinAPI_ShellGetKnownFolderIDList ( $sGUID [, $iFlags = 0 [, $hToken = 0]] )",
        [
            "$sGUID": "The GUID that identifies the folder, e.g. $FOLDERID_Documents",
            "$iFlags": "**[optional]** The flags that specify special retrieval options",
            "$hToken": "**[optional]** The access token that represents a particular user",
        ];

    "_WinAPI_ShellGetKnownFolderPath" => "Retrieves the full path of a known folder identified",
        "_WinAPI_ShellGetKnownFolderPath ( $sGUID [, $iFlags = 0 [, $hToken = 0]] )",
        [
            "$sGUID": "The GUID that identifies the folder, e.g. $FOLDERID_Documents or $FOLDERID_Downloads",
            "$iFlags": "**[optional]** The flags that specify special retrieval options, e.g. $KF_FLAG_CREATE or $KF_FLAG_DONT_VERIFY",
            "$hToken": "**[optional]** The access token that represents a particular user",
        ];

    "_WinAPI_ShellGetLocalizedName" => "Retrieves the localized name of a file in a Shell folder",
        "_WinAPI_ShellGetLocalizedName ( $sFilePath )",
        [
            "$sFilePath": "The path of the file",
        ];

    "_WinAPI_ShellGetPathFromIDList" => "Converts an item identifier list to a file system path",
        "_WinAPI_ShellGetPathFromIDList ( $pPIDL )",
        [
            "$pPIDL": "The address of an item identifier list that specifies a file or directory location",
        ];

    "_WinAPI_ShellGetSetFolderCustomSettings" => "Sets or retrieves custom folder settings",
        "_WinAPI_ShellGetSetFolderCustomSettings ( $sFilePath, $iFlag, ByRef $tSHFCS )",
        [
            "$sFilePath": "The path to the folder",
            "$iFlag": "The flag that specifies the action to perform, $FCS_READ, $FCS_FORCEWRITE or $FCS_FLAGS",
            "$tSHFCS": "$tagSHFOLDERCUSTOMSETTINGS structure that provides or receives the custom folder settings",
        ];

    "_WinAPI_ShellGetSettings" => "Retrieves the current Shell option settings",
        "_WinAPI_ShellGetSettings ( $iFlags )",
        [
            "$iFlags": "The flags that indicate which settings should be retrieved, e.g. $SSF_SHOWALLOBJECTS, $SSF_SHOWEXTENSIONS or $SSF_SHOWSYSFILES",
        ];

    "_WinAPI_ShellGetSpecialFolderLocation" => "Retrieves a pointer to the ITEMIDLIST structure of a special folder",
        "_WinAPI_ShellGetSpecialFolderLocation ( $iCSIDL )",
        [
            "$iCSIDL": "The CSIDL value that identifies the folder of interest, e.g. $CSIDL_DESKTOP, $CSIDL_PERSONAL or $CSIDL_PROGRAM_FILES",
        ];

    "_WinAPI_ShellGetSpecialFolderPath" => "Retrieves the path of a special folder",
        "_WinAPI_ShellGetSpecialFolderPath ( $iCSIDL [, $bCreate = False] )",
        [
            "$iCSIDL": "The CSIDL value that identifies the folder of interest",
            "$bCreate": "**[optional]** Specifies whether the folder should be created if it does not already exist",
        ];

    "_WinAPI_ShellGetStockIconInfo" => "Retrieves information about system-defined Shell icons",
        "_WinAPI_ShellGetStockIconInfo ( $iSIID, $iFlags )",
        [
            "$iSIID": "The stock icon identifier, e.g. $SIID_DOCNOASSOC, $SIID_FOLDER, $SIID_SHIELD or $SIID_WARNING",
            "$iFlags": "The flags that specify which information is requested, e.g. $SHGSI_ICON, $SHGSI_SMALLICON or $SHGSI_LARGEICON",
        ];

    "_WinAPI_ShellILCreateFromPath" => "Creates a pointer to an item identifier list (PIDL) from a path",
        "_WinAPI_ShellILCreateFromPath ( $sFilePath )",
        [
            "$sFilePath": "The path to be converted",
        ];

    "_WinAPI_ShellNotifyIcon" => "Sends a message to the taskbar's status area",
        "_WinAPI_ShellNotifyIcon ( $iMessage, $tNOTIFYICONDATA )",
        [
            "$iMessage": "The action to be taken by this function, $NIM_ADD, $NIM_MODIFY, $NIM_DELETE, $NIM_SETFOCUS or $NIM_SETVERSION",
            "$tNOTIFYICONDATA": "$tagNOTIFYICONDATA structure",
        ];

    "_WinAPI_ShellNotifyIconGetRect" => "Gets the screen coordinates of the bounding rectangle of a notification icon",
        "_WinAPI_ShellNotifyIconGetRect ( $hWnd, $iID [, $tGUID = 0] )",
        [
            "$hWnd": "Handle to the parent window used by the notification's callback function",
            "$iID": "The application-defined identifier of the notification icon",
            "$tGUID": "**[optional]** $tagGUID structure that identifies the icon",
        ];

    "_WinAPI_ShellObjectProperties" => "Invokes the Properties context menu command on a Shell object",
        "_WinAPI_ShellObjectProperties ( $sFilePath [, $iType = 2 [, $sProperty = '' [, $hParent = 0]]] )",
        [
            "$sFilePath": "The object name",
            "$iType": "**[optional]** The type of object, $SHOP_FILEPATH, $SHOP_PRINTERNAME or $SHOP_VOLUMEGUID",
            "$sProperty": "**[optional]** The name of the property sheet page to be opened initially",
            "$hParent": "**[optional]** Handle to the parent window of the dialog box",
        ];

    "_WinAPI_ShellOpenFolderAndSelectItems" => "Opens a Windows Explorer window with specified items in a particular folder selected",
        "_WinAPI_ShellOpenFolderAndSelectItems ( $sFilePath [, $aNames = 0 [, $iStart = 0 [, $iEnd = -1 [, $iFlags = 0]]]] )",
        [
            "$sFilePath": "The full path to the folder",
            "$aNames": "**[optional]** An array of the names of the items in the folder to select",
            "$iStart": "**[optional]** The index of array to start selecting at",
            "$iEnd": "**[optional]** The index of array to stop selecting at",
            "$iFlags": "**[optional]** The optional flags, e.g. $OFASI_EDIT or $OFASI_OPENDESKTOP",
        ];

    "_WinAPI_ShellOpenWithDlg" => "Displays the Open With dialog box",
        "_WinAPI_ShellOpenWithDlg ( $sFilePath [, $iFlags = 0 [, $hParent = 0]] )",
        [
            "$sFilePath": "The full path of the file to open",
            "$iFlags": "**[optional]** The flags that specify characteristics of the Open With dialog box, e.g. $OAIF_ALLOW_REGISTRATION, $OAIF_EXEC or $OAIF_REGISTER_EXT",
            "$hParent": "**[optional]** Handle to the parent window",
        ];

    "_WinAPI_ShellQueryRecycleBin" => "Retrieves the size of the Recycle Bin and the number of items in it, for a specified drive",
        "_WinAPI_ShellQueryRecycleBin ( [$sRoot = ''] )",
        [
            "$sRoot": "**[optional]** The path of the root drive on which the Recycle Bin is located. If an empty string, all Recycle Bins on all drives are queried.",
        ];

    "_WinAPI_ShellQueryUserNotificationState" => "Checks the state of the computer for the current user to determine whether sending a notification is appropriate",
        "_WinAPI_ShellQueryUserNotificationState ( )",
        [];

    "_WinAPI_ShellRemoveLocalizedName" => "Removes the localized name of a file in a Shell folder",
        "_WinAPI_ShellRemoveLocalizedName ( $sFilePath )",
        [
            "$sFilePath": "The path of the file",
        ];

    "_WinAPI_ShellRestricted" => "Determines whether a specified administrator policy is in effect",
        "_WinAPI_ShellRestricted ( $iRestriction )",
        [
            "$iRestriction": "The restriction value to check, e.g. $REST_NORUN, $REST_NOCLOSE or $REST_NODRIVES",
        ];

    "_WinAPI_ShellSetKnownFolderPath" => "Redirects a known folder to a new location",
        "_WinAPI_ShellSetKnownFolderPath ( $sGUID, $sFilePath [, $iFlags = 0 [, $hToken = 0]] )",
        [
            "$sGUID": "The GUID that identifies the known folder",
            "$sFilePath": "The folder's new path",
            "$iFlags": "**[optional]** The flags that specify special options",
            "$hToken": "**[optional]** The access token that represents a particular user",
        ];

    "_WinAPI_ShellSetLocalizedName" => "Sets the localized name of a file in a Shell folder",
        "_WinAPI_ShellSetLocalizedName ( $sFilePath, $sModule, $iResID )",
        [
            "$sFilePath": "The path of the file",
            "$sModule": "The path of the module that contains the string resource",
            "$iResID": "The resource ID of the localized name",
        ];

    "_WinAPI_ShellSetSettings" => "Sets the current Shell option settings",
        "_WinAPI_ShellSetSettings ( $iFlags, $bSet )",
        [
            "$iFlags": "The flags that indicate which settings should be set",
            "$bSet": "Specifies whether to set or reset the specified settings",
        ];

    "_WinAPI_ShellUpdateImage" => "Notifies the Shell that an image in the system image list has changed",
        "_WinAPI_ShellUpdateImage ( $sIcon, $iIndex, $iImage [, $iFlags = 0] )",
        [
            "$sIcon": "The full path to the file that contains the image",
            "$iIndex": "The index of the image in the file",
            "$iImage": "The index of the image in the system image list",
            "$iFlags": "**[optional]** The flags that determine the contents of the image, $GIL_NOTFILENAME or $GIL_SIMULATEDOC",
        ];

    "_WinAPI_ShellUserAuthenticationDlg" => "Creates and displays a configurable dialog box that accepts credentials information from a user",
        "_WinAPI_ShellUserAuthenticationDlg ( $sCaption, $sMessage, $sUser, $sPassword, $sTarget [, $iFlags = 0 [, $iError = 0 [, $bSave = False [, $hBitmap = 0 [, $hParent = 0]]]]] )",
        [
            "$sCaption": "The title for the dialog box",
            "$sMessage": "The brief message to display in the dialog box",
            "$sUser": "The default user name",
            "$sPassword": "The default password",
            "$sTarget": "The name of the target, typically a server name",
            "$iFlags": "**[optional]** The flags that specify special behavior for this function",
            "$iError": "**[optional]** The system error code that specifies why the credential dialog box is needed",
            "$bSave": "**[optional]** Specifies whether the \"Save\" check box is selected",
            "$hBitmap": "**[optional]** Handle to the bitmap to display in the dialog box",
            "$hParent": "**[optional]** Handle to the parent window of the dialog box",
        ];

    "_WinAPI_ShellUserAuthenticationDlgEx" => "Creates and displays a configurable dialog box that accepts credentials information from a user",
        "_WinAPI_ShellUserAuthenticationDlgEx ( $sCaption, $sMessage, $sUser, $sPassword [, $iFlags = 0 [, $iAuthError = 0 [, $bSave = False [, $iPackage = 0 [, $hParent = 0]]]]] )",
        [
            "$sCaption": "The title for the dialog box",
            "$sMessage": "The brief message to display in the dialog box",
            "$sUser": "The default user name",
            "$sPassword": "The default password",
            "$iFlags": "**[optional]** The flags that specify special behavior for this function, e.g. $CREDUIWIN_CHECKBOX or $CREDUIWIN_GENERIC",
            "$iAuthError": "**[optional]** The Windows error code that is displayed in the dialog box",
            "$bSave": "**[optional]** Specifies whether the \"Save\" check box is selected",
            "$iPackage": "**[optional]** The authentication package",
            "$hParent": "**[optional]** Handle to the parent window of the dialog box",
        ];

    "_WinAPI_ShortToWord" => "Converts a value of type SHORT to a value of type WORD",
        "_WinAPI_ShortToWord ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_ShowCaret" => "Makes the caret visible on the screen at the caret's current position",
        "_WinAPI_ShowCaret ( $hWnd )",
        [
            "$hWnd": "Handle to the window that owns the caret. If 0, the caret is shown in any window owned by the current task.",
        ];

    "_WinAPI_ShowCursor" => "Displays or hides the cursor",
        "_WinAPI_ShowCursor ( $bShow )",
        [
            "$bShow": "If True, the cursor is shown, otherwise it is hidden",
        ];

    "_WinAPI_ShowError" => "Displays an error message box with an optional exit",
        "_WinAPI_ShowError ( $sText [, $bExit = True] )",
        [
            "$sText": "Error text to display",
            "$bExit": "**[optional]** Specifies whether to exit after the display:\n    True - Exit program after display\n    False - Return normally after display",
        ];

    "_WinAPI_ShowMsg" => "Displays an information message box",
        "_WinAPI_ShowMsg ( $sText )",
        [
            "$sText": "Information text to display",
        ];

    "_WinAPI_ShowOwnedPopups" => "Shows or hides all pop-up windows owned by the specified window",
        "_WinAPI_ShowOwnedPopups ( $hWnd, $bShow )",
        [
            "$hWnd": "Handle to the window that owns the pop-up windows to be shown or hidden",
            "$bShow": "Specifies whether pop-up windows are to be shown or hidden",
        ];

    "_WinAPI_ShowWindow" => "Sets the specified window's show state",
        "_WinAPI_ShowWindow ( $hWnd [, $iCmdShow = 5] )",
        [
            "$hWnd": "Handle of window",
            "$iCmdShow": "**[optional]** Specifies how the window is to be shown:\n    @SW_HIDE - Hides the window and activates another window\n    @SW_MAXIMIZE - Maximizes the specified window\n    @SW_MINIMIZE - Minimizes the specified window and activates the next top-level window in the Z order\n    @SW_RESTORE - Activates and displays the window\n    @SW_SHOW - Activates the window and displays it in its current size and position\n    @SW_SHOWDEFAULT - Sets the show state based on the SW_ flag specified in the STARTUPINFO structure\n    @SW_SHOWMAXIMIZED - Activates the window and displays it as a maximized window\n    @SW_SHOWMINIMIZED - Activates the window and displays it as a minimized window\n    @SW_SHOWNA - Displays the window in its current state\n    @SW_SHOWNOACTIVATE - Displays a window in its most recent size and position\n    @SW_SHOWNORMAL - Activates and displays a window",
        ];

    "_WinAPI_ShutdownBlockReasonCreate" => "Indicates that the system cannot be shut down and sets a reason string to be displayed to the user if system shutdown is initiated",
        "_WinAPI_ShutdownBlockReasonCreate ( $hWnd, $sText )",
        [
            "$hWnd": "Handle to the main window of the application",
            "$sText": "The reason the application must block system shutdown",
        ];

    "_WinAPI_ShutdownBlockReasonDestroy" => "Indicates that the system can be shut down and frees the reason string",
        "_WinAPI_ShutdownBlockReasonDestroy ( $hWnd )",
        [
            "$hWnd": "Handle to the main window of the application",
        ];

    "_WinAPI_ShutdownBlockReasonQuery" => "Retrieves the reason string set by the _WinAPI_ShutdownBlockReasonCreate() function",
        "_WinAPI_ShutdownBlockReasonQuery ( $hWnd )",
        [
            "$hWnd": "Handle to the main window of the application",
        ];

    "_WinAPI_SizeOfResource" => "Returns the size, in bytes, of the specified resource",
        "_WinAPI_SizeOfResource ( $hInstance, $hResource )",
        [
            "$hInstance": "Handle to the module whose executable file contains the resource",
            "$hResource": "Handle to the resource, returned by _WinAPI_FindResource()",
        ];

    "_WinAPI_StretchBlt" => "Copies a bitmap from a source rectangle into a destination rectangle, stretching or compressing the bitmap to fit",
        "_WinAPI_StretchBlt ( $hDestDC, $iXDest, $iYDest, $iWidthDest, $iHeightDest, $hSrcDC, $iXSrc, $iYSrc, $iWidthSrc, $iHeightSrc, $iRop )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$iXDest": "The x-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iYDest": "The y-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iWidthDest": "The width, in logical units, of the destination rectangle",
            "$iHeightDest": "The height, in logical units, of the destination rectangle",
            "$hSrcDC": "Handle to the source device context",
            "$iXSrc": "The x-coordinate, in logical units, of the upper-left corner of the source rectangle",
            "$iYSrc": "The y-coordinate, in logical units, of the upper-left corner of the source rectangle",
            "$iWidthSrc": "The width, in logical units, of the source rectangle",
            "$iHeightSrc": "The height, in logical units, of the source rectangle",
            "$iRop": "The raster-operation code, e.g. $SRCCOPY or $SRCAND",
        ];

    "_WinAPI_StretchDIBits" => "Copies the color data for a rectangle of pixels in a DIB, JPEG, or PNG image to the specified destination rectangle",
        "_WinAPI_StretchDIBits ( $hDestDC, $iXDest, $iYDest, $iWidthDest, $iHeightDest, $iXSrc, $iYSrc, $iWidthSrc, $iHeightSrc, $tBITMAPINFO, $iUsage, $pBits, $iRop )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$iXDest": "The x-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iYDest": "The y-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iWidthDest": "The width, in logical units, of the destination rectangle",
            "$iHeightDest": "The height, in logical units, of the destination rectangle",
            "$iXSrc": "The x-coordinate, in pixels, of the source rectangle in the image",
            "$iYSrc": "The y-coordinate, in pixels, of the source rectangle in the image",
            "$iWidthSrc": "The width, in pixels, of the source rectangle in the image",
            "$iHeightSrc": "The height, in pixels, of the source rectangle in the image",
            "$tBITMAPINFO": "$tagBITMAPINFO structure that contains information about the DIB",
            "$iUsage": "Specifies whether the color table contains explicit RGB values or indexes into a palette",
            "$pBits": "Pointer to the image bits, which are stored as an array of bytes",
            "$iRop": "The raster-operation code",
        ];

    "_WinAPI_StrFormatByteSize" => "Converts a numeric value into a string that represents the number expressed as a size value in bytes, kilobytes, megabytes, or gigabytes",
        "_WinAPI_StrFormatByteSize ( $iSize )",
        [
            "$iSize": "The numeric value to be converted",
        ];

    "_WinAPI_StrFormatByteSizeEx" => "Converts a numeric value into a string that represents the number expressed as a size value in bytes, kilobytes, megabytes, or gigabytes, using the user's locale",
        "_WinAPI_StrFormatByteSizeEx ( $iSize )",
        [
            "$iSize": "The numeric value to be converted",
        ];

    "_WinAPI_StrFormatKBSize" => "Converts a numeric value into a string that represents the number expressed as a size value in kilobytes",
        "_WinAPI_StrFormatKBSize ( $iSize )",
        [
            "$iSize": "The numeric value to be converted",
        ];

    "_WinAPI_StrFromTimeInterval" => "Converts a time interval to a string",
        "_WinAPI_StrFromTimeInterval ( $iTime [, $iDigits = 7] )",
        [
            "$iTime": "The time interval, in milliseconds",
            "$iDigits": "**[optional]** The maximum number of significant digits to be represented in the output string",
        ];

    "_WinAPI_StringFromGUID" => "Converts a binary GUID to string form",
        "_WinAPI_StringFromGUID ( $tGUID )",
        [
            "$tGUID": "$tagGUID structure or pointer to it",
        ];

    "_WinAPI_StrLen" => "Returns the length of the specified string",
        "_WinAPI_StrLen ( $pString [, $bUnicode = True] )",
        [
            "$pString": "Pointer to a null-terminated string",
            "$bUnicode": "**[optional]** Specifies whether the string is Unicode:\n    True - The string is Unicode (default)\n    False - The string is ANSI",
        ];

    "_WinAPI_StrokeAndFillPath" => "Closes any open figures in a path, strokes the outline of the path by using the current pen, and fills its interior by using the current brush",
        "_WinAPI_StrokeAndFillPath ( $hDC )",
        [
            "$hDC": "Handle to the device context",
        ];

    "_WinAPI_StrokePath" => "Renders the specified path by using the current pen",
        "_WinAPI_StrokePath ( $hDC )",
        [
            "$hDC": "Handle to a device context that contains the completed path",
        ];

    "_WinAPI_SUBLANGID" => "Extracts a sublanguage identifier from a language identifier",
        "_WinAPI_SUBLANGID ( $iLngID )",
        [
            "$iLngID": "Language identifier",
        ];

    "_WinAPI_SubtractRect" => "Determines the coordinates of a rectangle formed by subtracting one rectangle from another",
        "_WinAPI_SubtractRect ( $tRECT1, $tRECT2 )",
        [
            "$tRECT1": "$tagRECT structure from which the rectangle specified by $tRECT2 is to be subtracted",
            "$tRECT2": "$tagRECT structure that is subtracted from the rectangle specified by $tRECT1",
        ];

    "_WinAPI_SuspendThread" => "Suspends the specified thread",
        "_WinAPI_SuspendThread ( $hThread )",
        [
            "$hThread": "Handle to the thread that is to be suspended",
        ];

    "_WinAPI_SwapDWord" => "Converts a value of type DWORD from big-endian to little-endian and vice versa",
        "_WinAPI_SwapDWord ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_SwapMouseButton" => "Reverses or restores the meaning of the left and right mouse buttons",
        "_WinAPI_SwapMouseButton ( $bSwap )",
        [
            "$bSwap": "Specifies whether the mouse button meanings are reversed or restored",
        ];

    "_WinAPI_SwapQWord" => "Converts a value of type UINT64 from big-endian to little-endian and vice versa",
        "_WinAPI_SwapQWord ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_SwapWord" => "Converts a value of type WORD from big-endian to little-endian and vice versa",
        "_WinAPI_SwapWord ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_SwitchDesktop" => "Makes the specified desktop visible and activates it",
        "_WinAPI_SwitchDesktop ( $hDesktop )",
        [
            "$hDesktop": "Handle to the desktop",
        ];

    "_WinAPI_SwitchToThisWindow" => "Switches the focus to a specified window and bring it to the foreground",
        "_WinAPI_SwitchToThisWindow ( $hWnd [, $bAltTab = False] )",
        [
            "$hWnd": "Handle to the window",
            "$bAltTab": "**[optional]** Specifies whether the window is being switched to using the Alt/Ctl+Tab key sequence",
        ];

    "_WinAPI_SystemParametersInfo" => "Retrieves or sets the value of one of the system-wide parameters",
        "_WinAPI_SystemParametersInfo ( $iAction [, $iParam = 0 [, $vParam = 0 [, $iWinIni = 0]]] )",
        [
            "$iAction": "The system-wide parameter to be retrieved or set, e.g. $SPI_GETWORKAREA, $SPI_SETDESKWALLPAPER or $SPI_GETNONCLIENTMETRICS",
            "$iParam": "**[optional]** A parameter whose usage and format depends on the system parameter being queried or set",
            "$vParam": "**[optional]** A parameter whose usage and format depends on the system parameter being queried or set",
            "$iWinIni": "**[optional]** If a system parameter is being set, specifies whether the user profile is to be updated, e.g. $SPIF_UPDATEINIFILE or $SPIF_SENDCHANGE",
        ];

    "_WinAPI_TabbedTextOut" => "Writes a character string at a specified location, expanding tabs to the values specified in an array of tab-stop positions",
        "_WinAPI_TabbedTextOut ( $hDC, $iX, $iY, $sString [, $aTab = 0 [, $iStart = 0 [, $iEnd = -1 [, $iOrigin = 0]]]] )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate of the starting point of the string, in logical units",
            "$iY": "The y-coordinate of the starting point of the string, in logical units",
            "$sString": "The character string to draw",
            "$aTab": "**[optional]** The array containing the tab-stop positions, in logical units",
            "$iStart": "**[optional]** The index of array to start at",
            "$iEnd": "**[optional]** The index of array to stop at",
            "$iOrigin": "**[optional]** The x-coordinate of the starting position from which tabs are expanded, in logical units",
        ];

    "_WinAPI_TerminateJobObject" => "Terminates all processes currently associated with the job",
        "_WinAPI_TerminateJobObject ( $hJob [, $iExitCode = 0] )",
        [
            "$hJob": "Handle to the job whose processes will be terminated",
            "$iExitCode": "**[optional]** The exit code to be used by all processes and threads in the job object",
        ];

    "_WinAPI_TerminateProcess" => "Terminates the specified process and all of its threads",
        "_WinAPI_TerminateProcess ( $hProcess [, $iExitCode = 0] )",
        [
            "$hProcess": "Handle to the process to be terminated",
            "$iExitCode": "**[optional]** The exit code to be used by the process and threads terminated",
        ];

    "_WinAPI_TextOut" => "Writes a character string at the specified location, using the currently selected font, background color, and text color",
        "_WinAPI_TextOut ( $hDC, $iX, $iY, $sText )",
        [
            "$hDC": "Handle to the device context",
            "$iX": "The x-coordinate, in logical coordinates, of the reference point that the system uses to align the string",
            "$iY": "The y-coordinate, in logical coordinates, of the reference point that the system uses to align the string",
            "$sText": "The string to be drawn",
        ];

    "_WinAPI_TileWindows" => "Tiles the specified child windows of the specified parent window",
        "_WinAPI_TileWindows ( $aWnds [, $tRECT = 0 [, $hParent = 0 [, $iFlags = 0 [, $iStart = 0 [, $iEnd = -1]]]]] )",
        [
            "$aWnds": "The array of handles to the child windows to arrange",
            "$tRECT": "**[optional]** $tagRECT structure that specifies the rectangular area, in client coordinates, within which the windows are arranged",
            "$hParent": "**[optional]** Handle to the parent window. If 0, the desktop window is used.",
            "$iFlags": "**[optional]** The tiling flags, e.g. $MDITILE_HORIZONTAL, $MDITILE_SKIPDISABLED or $MDITILE_VERTICAL",
            "$iStart": "**[optional]** The index of array to start arranging at",
            "$iEnd": "**[optional]** The index of array to stop arranging at",
        ];

    "_WinAPI_ToUnicode" => "Translates the specified virtual-key code and keyboard state to the corresponding Unicode character or characters",
        "_WinAPI_ToUnicode ( $vKey, $iScanCode [, $tState = 0 [, $iFlags = 0]] )",
        [
            "$vKey": "The virtual-key code to be translated",
            "$iScanCode": "The hardware scan code of the key to be translated",
            "$tState": "**[optional]** The structure that contains the current keyboard state",
            "$iFlags": "**[optional]** The behavior of the function",
        ];

    "_WinAPI_TrackMouseEvent" => "Posts messages when the mouse pointer leaves a window or hovers over a window for a specified amount of time",
        "_WinAPI_TrackMouseEvent ( $hWnd, $iFlags [, $iTime = -1] )",
        [
            "$hWnd": "Specifies a handle to the window to track",
            "$iFlags": "Specifies the services requested:\n    $TME_CANCEL - The caller wants to cancel a prior tracking request\n    $TME_HOVER - The caller wants hover notification\n    $TME_LEAVE - The caller wants leave notification\n    $TME_NONCLIENT - The caller wants hover and leave notification for the nonclient areas\n    $TME_QUERY - The function fills in the structure instead of treating it as a tracking request",
            "$iTime": "**[optional]** Specifies the hover time-out in milliseconds",
        ];

    "_WinAPI_TransparentBlt" => "Performs a bit-block transfer of the color data corresponding to a rectangle of pixels, treating one color as transparent",
        "_WinAPI_TransparentBlt ( $hDestDC, $iXDest, $iYDest, $iWidthDest, $iHeightDest, $hSrcDC, $iXSrc, $iYSrc, $iWidthSrc, $iHeightSrc, $iRGB )",
        [
            "$hDestDC": "Handle to the destination device context",
            "$iXDest": "The x-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iYDest": "The y-coordinate, in logical units, of the upper-left corner of the destination rectangle",
            "$iWidthDest": "The width, in logical units, of the destination rectangle",
            "$iHeightDest": "The height, in logical units, of the destination rectangle",
            "$hSrcDC": "Handle to the source device context",
            "$iXSrc": "The x-coordinate, in logical units, of the source rectangle",
            "$iYSrc": "The y-coordinate, in logical units, of the source rectangle",
            "$iWidthSrc": "The width, in logical units, of the source rectangle",
            "$iHeightSrc": "The height, in logical units, of the source rectangle",
            "$iRGB": "The RGB color in the source bitmap to treat as transparent",
        ];

    "_WinAPI_UnhookWindowsHookEx" => "Removes a hook procedure installed in a hook chain by the _WinAPI_SetWindowsHookEx() function",
        "_WinAPI_UnhookWindowsHookEx ( $hHook )",
        [
            "$hHook": "Handle to the hook to be removed",
        ];

    "_WinAPI_UnionRect" => "Creates the union of two rectangles",
        "_WinAPI_UnionRect ( $tRECT1, $tRECT2 )",
        [
            "$tRECT1": "$tagRECT structure that contains the first source rectangle",
            "$tRECT2": "$tagRECT structure that contains the second source rectangle",
        ];

    "_WinAPI_UniqueHardwareID" => "Generates a unique hardware identifier (ID) for the local computer",
        "_WinAPI_UniqueHardwareID ( [$iFlags = 0] )",
        [
            "$iFlags": "**[optional]** The flags that specifies what information would be used to generate ID, e.g. $UHID_MB, $UHID_BIOS, $UHID_CPU or $UHID_HDD",
        ];

    "_WinAPI_UnloadKeyboardLayout" => "Unloads an input locale identifier",
        "_WinAPI_UnloadKeyboardLayout ( $hLocale )",
        [
            "$hLocale": "The input locale identifier to be unloaded",
        ];

    "_WinAPI_UnlockFile" => "Unlocks a region in an open file",
        "_WinAPI_UnlockFile ( $hFile, $iOffset, $iLength )",
        [
            "$hFile": "Handle to the file",
            "$iOffset": "The starting byte offset in the file where the locked region begins",
            "$iLength": "The length of the byte range to be unlocked",
        ];

    "_WinAPI_UnmapViewOfFile" => "Unmaps a mapped view of a file from the calling process's address space",
        "_WinAPI_UnmapViewOfFile ( $pAddress )",
        [
            "$pAddress": "A pointer to the base address of the mapped view of a file that is to be unmapped",
        ];

    "_WinAPI_UnregisterApplicationRestart" => "Removes the active instance of an application from the restart list",
        "_WinAPI_UnregisterApplicationRestart ( )",
        [];

    "_WinAPI_UnregisterClass" => "Unregisters a window class, freeing the memory required for the class",
        "_WinAPI_UnregisterClass ( $sClass [, $hInstance = 0] )",
        [
            "$sClass": "The window class name or atom",
            "$hInstance": "**[optional]** Handle to the instance of the module that created the class",
        ];

    "_WinAPI_UnregisterHotKey" => "Frees a hot key previously registered by the calling thread",
        "_WinAPI_UnregisterHotKey ( $hWnd, $iID )",
        [
            "$hWnd": "Handle to the window associated with the hot key to be freed",
            "$iID": "The identifier of the hot key to be freed",
        ];

    "_WinAPI_UnregisterPowerSettingNotification" => "Unregisters the power setting notification",
        "_WinAPI_UnregisterPowerSettingNotification ( $hNotify )",
        [
            "$hNotify": "The handle returned from the _WinAPI_RegisterPowerSettingNotification() function",
        ];

    "_WinAPI_UpdateLayeredWindow" => "Updates the position, size, shape, content, and translucency of a layered window",
        "_WinAPI_UpdateLayeredWindow ( $hWnd, $hDestDC, $tPTDest, $tSize, $hSrcDC, $tPTSrce, $iRGB, $tBlend, $iFlags )",
        [
            "$hWnd": "Handle to a layered window",
            "$hDestDC": "Handle to a DC for the screen",
            "$tPTDest": "$tagPOINT structure that specifies the new screen position of the layered window",
            "$tSize": "$tagSIZE structure that specifies the new size of the layered window",
            "$hSrcDC": "Handle to a DC for the surface that defines the layered window",
            "$tPTSrce": "$tagPOINT structure that specifies the location of the layer in the device context",
            "$iRGB": "The color key to be used when composing the layered window",
            "$tBlend": "$tagBLENDFUNCTION structure that specifies the transparency value to be used when composing the layered window",
            "$iFlags": "The action to be taken, e.g. $ULW_ALPHA, $ULW_COLORKEY or $ULW_OPAQUE",
        ];

    "_WinAPI_UpdateLayeredWindowEx" => "Updates a layered window by using the specified bitmap",
        "_WinAPI_UpdateLayeredWindowEx ( $hWnd, $iX, $iY, $hBitmap [, $iOpacity = 255 [, $bDelete = False]] )",
        [
            "$hWnd": "Handle to a layered window",
            "$iX": "The x-coordinate of the layered window's new position. If -1, the window is not moved.",
            "$iY": "The y-coordinate of the layered window's new position. If -1, the window is not moved.",
            "$hBitmap": "Handle to the 32 bits-per-pixel bitmap with an alpha channel",
            "$iOpacity": "**[optional]** The alpha transparency value to be used on the entire source bitmap",
            "$bDelete": "**[optional]** Specifies whether to delete the bitmap after updating the window",
        ];

    "_WinAPI_UpdateLayeredWindowIndirect" => "Updates the position, size, shape, content, and translucency of a layered window",
        "_WinAPI_UpdateLayeredWindowIndirect ( $hWnd, $tULWINFO )",
        [
            "$hWnd": "Handle to a layered window",
            "$tULWINFO": "$tagUPDATELAYEREDWINDOWINFO structure that contains the information for the window",
        ];

    "_WinAPI_UpdateResource" => "Adds, deletes, or replaces a resource in a portable executable (PE) file",
        "_WinAPI_UpdateResource ( $hUpdate, $sType, $sName, $iLanguage, $pData, $iSize )",
        [
            "$hUpdate": "A module handle returned by the _WinAPI_BeginUpdateResource() function",
            "$sType": "The resource type to be updated",
            "$sName": "The name of the resource to be updated",
            "$iLanguage": "The language identifier of the resource to be updated",
            "$pData": "A pointer to the resource data to be inserted into the file. If 0, the resource is deleted.",
            "$iSize": "The size of the resource data, in bytes",
        ];

    "_WinAPI_UpdateWindow" => "Updates the client area of a window by sending a WM_PAINT message to the window",
        "_WinAPI_UpdateWindow ( $hWnd )",
        [
            "$hWnd": "Handle of window to update",
        ];

    "_WinAPI_UrlApplyScheme" => "Determines a scheme for a specified URL string, and returns a string with an appropriate prefix",
        "_WinAPI_UrlApplyScheme ( $sUrl [, $iFlags = 1] )",
        [
            "$sUrl": "The URL",
            "$iFlags": "**[optional]** The flags that specify how to determine the scheme, e.g. $URL_APPLY_DEFAULT, $URL_APPLY_GUESSSCHEME, $URL_APPLY_GUESSFILE or $URL_APPLY_FORCEAPPLY",
        ];

    "_WinAPI_UrlCanonicalize" => "Converts a URL string into canonical form",
        "_WinAPI_UrlCanonicalize ( $sUrl, $iFlags )",
        [
            "$sUrl": "The URL string",
            "$iFlags": "The flags that specify how the URL is converted to canonical form",
        ];

    "_WinAPI_UrlCombine" => "Combines a base and relative URL into canonical form",
        "_WinAPI_UrlCombine ( $sUrl, $sPart [, $iFlags = 0] )",
        [
            "$sUrl": "The base URL",
            "$sPart": "The relative URL",
            "$iFlags": "**[optional]** The flags that specify how the URL is converted to canonical form",
        ];

    "_WinAPI_UrlCompare" => "Makes a case-sensitive comparison of two URL strings",
        "_WinAPI_UrlCompare ( $sUrl1, $sUrl2 [, $bIgnoreSlash = False] )",
        [
            "$sUrl1": "The first URL",
            "$sUrl2": "The second URL",
            "$bIgnoreSlash": "**[optional]** Specifies whether to ignore a trailing '/' character on either or both URLs",
        ];

    "_WinAPI_UrlCreateFromPath" => "Converts a Microsoft MS-DOS path to a canonicalized URL",
        "_WinAPI_UrlCreateFromPath ( $sFilePath )",
        [
            "$sFilePath": "The MS-DOS path",
        ];

    "_WinAPI_UrlFixup" => "Attempts to correct a URL whose protocol identifier is incorrect",
        "_WinAPI_UrlFixup ( $sUrl )",
        [
            "$sUrl": "The URL to be corrected",
        ];

    "_WinAPI_UrlGetPart" => "Retrieves a specified part from the URL",
        "_WinAPI_UrlGetPart ( $sUrl, $iPart )",
        [
            "$sUrl": "The URL",
            "$iPart": "The part of the URL to retrieve, e.g. $URL_PART_HOSTNAME, $URL_PART_PASSWORD, $URL_PART_PORT, $URL_PART_QUERY, $URL_PART_SCHEME or $URL_PART_USERNAME",
        ];

    "_WinAPI_UrlHash" => "Hashes a URL string",
        "_WinAPI_UrlHash ( $sUrl [, $iLength = 32] )",
        [
            "$sUrl": "The URL",
            "$iLength": "**[optional]** The size of the hash value to return, in bytes",
        ];

    "_WinAPI_UrlIs" => "Tests whether or not a URL is a specified type",
        "_WinAPI_UrlIs ( $sUrl [, $iType = 0] )",
        [
            "$sUrl": "The URL",
            "$iType": "**[optional]** The type of URL to be tested for, e.g. $URLIS_APPLIABLE, $URLIS_DIRECTORY, $URLIS_FILEURL, $URLIS_HASQUERY, $URLIS_NOHISTORY, $URLIS_OPAQUE or $URLIS_URL",
        ];

    "_WinAPI_UserHandleGrantAccess" => "Grants or denies access to a handle to a User object to a job that has a user-interface restriction",
        "_WinAPI_UserHandleGrantAccess ( $hObject, $hJob, $bGrant )",
        [
            "$hObject": "Handle to the User object",
            "$hJob": "Handle to the job to be granted access to the User handle",
            "$bGrant": "Specifies whether to grant or deny access to the User handle",
        ];

    "_WinAPI_ValidateRect" => "Validates the client area within a rectangle by removing the rectangle from the update region of the window",
        "_WinAPI_ValidateRect ( $hWnd [, $tRECT = 0] )",
        [
            "$hWnd": "Handle to the window whose update region is to be modified",
            "$tRECT": "**[optional]** $tagRECT structure that contains the client coordinates of the rectangle to be removed. If 0, the entire client area is validated.",
        ];

    "_WinAPI_ValidateRgn" => "Validates the client area within a region by removing the region from the current update region of the window",
        "_WinAPI_ValidateRgn ( $hWnd [, $hRgn = 0] )",
        [
            "$hWnd": "Handle to the window whose update region is to be modified",
            "$hRgn": "**[optional]** Handle to a region that defines the area to be removed. If 0, the entire client area is removed.",
        ];

    "_WinAPI_VerQueryRoot" => "Retrieves the fixed version information from the specified version-information resource",
        "_WinAPI_VerQueryRoot ( $pData )",
        [
            "$pData": "A pointer to the buffer that contains the version-information resource returned by _WinAPI_GetFileVersionInfo()",
        ];

    "_WinAPI_VerQueryValue" => "Retrieves the text information from the version-information resource",
        "_WinAPI_VerQueryValue ( $pData [, $sValues = ''] )",
        [
            "$pData": "A pointer to the buffer that contains the version-information resource returned by _WinAPI_GetFileVersionInfo()",
            "$sValues": "**[optional]** The names of the version values to retrieve, separated by \"|\", e.g. \"FileVersion|ProductName\"",
        ];

    "_WinAPI_VerQueryValueEx" => "Retrieves the text information from the version-information resource of the specified binary module",
        "_WinAPI_VerQueryValueEx ( $hModule [, $sValues = '' [, $iLanguage = 0x0400]] )",
        [
            "$hModule": "Handle to the module, or the name of the file",
            "$sValues": "**[optional]** The names of the version values to retrieve, separated by \"|\"",
            "$iLanguage": "**[optional]** The language identifier of the version-information resource",
        ];

    "_WinAPI_VirtualAlloc" => "Reserves or commits a region of pages in the virtual address space of the calling process",
        "_WinAPI_VirtualAlloc ( $pAddress, $iSize, $iAllocation, $iProtect )",
        [
            "$pAddress": "The starting address of the region to allocate",
            "$iSize": "The size of the region, in bytes",
            "$iAllocation": "The type of memory allocation, e.g. $MEM_COMMIT, $MEM_RESERVE, $MEM_RESET or $MEM_TOP_DOWN",
            "$iProtect": "The memory protection for the region of pages to be allocated, e.g. $PAGE_EXECUTE_READWRITE or $PAGE_READWRITE",
        ];

    "_WinAPI_VirtualAllocEx" => "Reserves or commits a region of pages in the virtual address space of the specified process",
        "_WinAPI_VirtualAllocEx ( $hProcess, $pAddress, $iSize, $iAllocation, $iProtect )",
        [
            "$hProcess": "Handle to the process",
            "$pAddress": "The starting address of the region to allocate",
            "$iSize": "The size of the region, in bytes",
            "$iAllocation": "The type of memory allocation",
            "$iProtect": "The memory protection for the region of pages to be allocated",
        ];

    "_WinAPI_VirtualFree" => "Releases or decommits a region of pages within the virtual address space of the calling process",
        "_WinAPI_VirtualFree ( $pAddress, $iSize, $iFreeType )",
        [
            "$pAddress": "A pointer to the base address of the region of pages to be freed",
            "$iSize": "The size of the region of memory to be freed, in bytes",
            "$iFreeType": "The type of free operation:\n    $MEM_DECOMMIT - Decommits the specified region of committed pages\n    $MEM_RELEASE - Releases the specified region of pages",
        ];

    "_WinAPI_VirtualFreeEx" => "Releases or decommits a region of memory within the virtual address space of a specified process",
        "_WinAPI_VirtualFreeEx ( $hProcess, $pAddress, $iSize, $iFreeType )",
        [
            "$hProcess": "Handle to the process",
            "$pAddress": "A pointer to the starting address of the region of memory to be freed",
            "$iSize": "The size of the region of memory to free, in bytes",
            "$iFreeType": "The type of free operation, $MEM_DECOMMIT or $MEM_RELEASE",
        ];

    "_WinAPI_VirtualLock" => "Locks the specified region of the process's virtual address space into physical memory",
        "_WinAPI_VirtualLock ( $pAddress, $iSize )",
        [
            "$pAddress": "A pointer to the base address of the region of pages to be locked",
            "$iSize": "The size of the region to be locked, in bytes",
        ];

    "_WinAPI_VirtualProtect" => "Changes the protection on a region of committed pages in the virtual address space of the calling process",
        "_WinAPI_VirtualProtect ( $pAddress, $iSize, $iProtect )",
        [
            "$pAddress": "The address of the starting page of the region of pages whose access protection attributes are to be changed",
            "$iSize": "The size of the region whose access protection attributes are to be changed, in bytes",
            "$iProtect": "The memory protection option",
        ];

    "_WinAPI_VirtualProtectEx" => "Changes the protection on a region of committed pages in the virtual address space of a specified process",
        "_WinAPI_VirtualProtectEx ( $hProcess, $pAddress, $iSize, $iProtect )",
        [
            "$hProcess": "Handle to the process",
            "$pAddress": "A pointer to the base address of the region of pages whose access protection attributes are to be changed",
            "$iSize": "The size of the region whose access protection attributes are changed, in bytes",
            "$iProtect": "The memory protection option",
        ];

    "_WinAPI_VirtualQuery" => "Retrieves information about a range of pages in the virtual address space of the calling process",
        "_WinAPI_VirtualQuery ( $pAddress )",
        [
            "$pAddress": "A pointer to the base address of the region of pages to be queried",
        ];

    "_WinAPI_VirtualQueryEx" => "Retrieves information about a range of pages within the virtual address space of a specified process",
        "_WinAPI_VirtualQueryEx ( $hProcess, $pAddress )",
        [
            "$hProcess": "Handle to the process whose memory information is queried",
            "$pAddress": "A pointer to the base address of the region of pages to be queried",
        ];

    "_WinAPI_VirtualUnlock" => "Unlocks a specified range of pages in the virtual address space of a process",
        "_WinAPI_VirtualUnlock ( $pAddress, $iSize )",
        [
            "$pAddress": "A pointer to the base address of the region of pages to be unlocked",
            "$iSize": "The size of the region being unlocked, in bytes",
        ];

    "_WinAPI_VkKeyScan" => "Translates a character to the corresponding virtual-key code and shift state",
        "_WinAPI_VkKeyScan ( $sChar [, $hLocale = 0] )",
        [
            "$sChar": "The character to be translated into a virtual-key code",
            "$hLocale": "**[optional]** The input locale identifier used to translate the character",
        ];

    "_WinAPI_WaitForInputIdle" => "Waits until a process is waiting for user input with no input pending, or a time out",
        "_WinAPI_WaitForInputIdle ( $hProcess [, $iTimeout = -1] )",
        [
            "$hProcess": "A handle to the process",
            "$iTimeout": "**[optional]** The time-out interval, in milliseconds. If -1, the function does not return until the process is idle.",
        ];

    "_WinAPI_WaitForMultipleObjects" => "Waits until one or all of the specified objects are in the signaled state",
        "_WinAPI_WaitForMultipleObjects ( $iCount, $paHandles [, $bWaitAll = False [, $iTimeout = -1]] )",
        [
            "$iCount": "The number of object handles to wait for",
            "$paHandles": "Pointer to an array of object handles",
            "$bWaitAll": "**[optional]** If True, the function returns when the state of all objects is signaled. If False, the function returns when the state of any one of the objects is set to signaled.",
            "$iTimeout": "**[optional]** The time-out interval, in milliseconds. The function returns if the interval elapses, even if the conditions are not met. If 0, the function tests the states of the specified objects and returns immediately. If -1, the function's time-out interval never elapses.",
        ];

    "_WinAPI_WaitForSingleObject" => "Waits until the specified object is in the signaled state",
        "_WinAPI_WaitForSingleObject ( $hHandle [, $iTimeout = -1] )",
        [
            "$hHandle": "A handle to the object",
            "$iTimeout": "**[optional]** The time-out interval, in milliseconds. If -1, the function's time-out interval never elapses.",
        ];

    "_WinAPI_WideCharToMultiByte" => "Converts a UTF-16 (wide character) string to a multibyte string",
        "_WinAPI_WideCharToMultiByte ( $vUnicode [, $iCodePage = 0 [, $bRetNoStruct = True [, $bRetBinary = False]]] )",
        [
            "$vUnicode": "String, DllStruct or Pointer to a DllStruct containing the wide-character string to convert",
            "$iCodePage": "**[optional]** Specifies the code page to be used to perform the conversion:\n    0 - The current system Windows ANSI code page\n    1 - The current system OEM code page\n    2 - The current system Macintosh code page\n    3 - The Windows ANSI code page for the current thread\n    42 - Symbol code page\n    65000 - UTF-7\n    65001 - UTF-8",
            "$bRetNoStruct": "**[optional]** Flags that indicate the type of return:\n    True - Return a string\n    False - Return a DllStruct",
            "$bRetBinary": "**[optional]** Flags that indicate the type of return when $bRetNoStruct is True:\n    True - Return binary\n    False - Return a string",
        ];

    "_WinAPI_WidenPath" => "Redefines the current path as the area that would be painted if the path were stroked using the current pen",
        "_WinAPI_WidenPath ( $hDC )",
        [
            "$hDC": "Handle to a device context that contains a closed path",
        ];

    "_WinAPI_WindowFromDC" => "Retrieves a handle to the window associated with the specified display device context",
        "_WinAPI_WindowFromDC ( $hDC )",
        [
            "$hDC": "Handle to the device context from which a handle to the associated window is to be retrieved",
        ];

    "_WinAPI_WindowFromPoint" => "Retrieves the handle of the window that contains the specified point",
        "_WinAPI_WindowFromPoint ( ByRef $tPoint )",
        [
            "$tPoint": "$tagPOINT structure that defines the point to be checked",
        ];

    "_WinAPI_WordToShort" => "Converts a value of type WORD to a value of type SHORT",
        "_WinAPI_WordToShort ( $iValue )",
        [
            "$iValue": "The value to convert",
        ];

    "_WinAPI_Wow64EnableWow64FsRedirection" => "Enables or disables file system redirection for the calling thread",
        "_WinAPI_Wow64EnableWow64FsRedirection ( $bEnable )",
        [
            "$bEnable": "Specifies whether to enable or disable WOW64 system folder redirection",
        ];

    "_WinAPI_WriteConsole" => "Writes a character string to a console screen buffer",
        "_WinAPI_WriteConsole ( $hConsole, $sText )",
        [
            "$hConsole": "Handle to the console screen buffer",
            "$sText": "Text to be written to the console screen buffer",
        ];

    "_WinAPI_WriteFile" => "Writes data to a file at the position specified by the file pointer",
        "_WinAPI_WriteFile ( $hFile, $pBuffer, $iToWrite, ByRef $iWritten [, $tOverlapped = 0] )",
        [
            "$hFile": "Handle to the file to be written",
            "$pBuffer": "Pointer to the buffer containing the data to be written",
            "$iToWrite": "Number of bytes to be written to the file",
            "$iWritten": "The number of bytes written",
            "$tOverlapped": "**[optional]** a $tagOVERLAPPED structure or a pointer to it",
        ];

    "_WinAPI_WriteProcessMemory" => "Writes memory in a specified process",
        "_WinAPI_WriteProcessMemory ( $hProcess, $pBaseAddress, $pBuffer, $iSize, ByRef $iWritten [, $sBuffer = \"ptr\"] )",
        [
            "$hProcess": "Identifies an open handle to a process whose memory is to be written to",
            "$pBaseAddress": "Points to the base address in the specified process to be written to",
            "$pBuffer": "Points to the buffer that supplies data to be written into the address space",
            "$iSize": "Specifies the requested number of bytes to write into the specified process",
            "$iWritten": "The actual number of bytes transferred into the specified process",
            "$sBuffer": "**[optional]** Contains the data type that $pBuffer represents",
        ];

    "_WinAPI_ZeroMemory" => "Fills a block of memory with zeros",
        "_WinAPI_ZeroMemory ( $pMemory, $iLength )",
        [
            "$pMemory": "A pointer to the starting address of the block of memory to fill with zeros",
            "$iLength": "The size of the block of memory to fill with zeros, in bytes",
        ];
};
